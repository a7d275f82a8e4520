//! Notification Types

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::logic::incident::types::{Incident, Recipient};

/// What gets handed to the sink: a flat summary, never the live record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentSummary {
    pub incident_id: Uuid,
    pub incident_type: String,
    pub location: String,
    pub confidence_score: u8,
    pub recipient: Recipient,
}

impl IncidentSummary {
    pub fn from_incident(incident: &Incident, recipient: Recipient) -> Self {
        Self {
            incident_id: incident.id,
            incident_type: incident.incident_type.clone(),
            location: incident.location.clone(),
            confidence_score: incident.confidence_score,
            recipient,
        }
    }
}

/// Sink transport failure. Recovered locally by the dispatcher, never
/// propagated to the caller.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Sink rejected alert: {0}")]
    Rejected(String),
}

/// Outcome of one dispatch attempt
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    pub ok: bool,
    /// Sink-provided detail on success, e.g. "Sent to Email Alert System"
    pub detail: String,
    pub error: Option<String>,
}

/// Attempted/succeeded/failed counters over the dispatch history
#[derive(Debug, Clone, Serialize)]
pub struct DispatchStats {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}
