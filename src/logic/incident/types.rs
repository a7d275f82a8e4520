//! Incident Types
//!
//! Fixed-schema incident records. Records are created once, mutated in
//! place by the lifecycle controller, and never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operator-managed incident status. Transitions are unconstrained among
/// the four values; only the initial `New` is set automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    New,
    Investigating,
    Resolved,
    Closed,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::New => "New",
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Resolved => "Resolved",
            IncidentStatus::Closed => "Closed",
        }
    }
}

/// Who a tactical alert goes to. The first send for an incident always
/// goes to security staff; every follow-up widens to parents/counselors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    #[serde(rename = "Admin/Security")]
    AdminSecurity,
    #[serde(rename = "Parents/Counselors")]
    ParentsCounselors,
}

impl Recipient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recipient::AdminSecurity => "Admin/Security",
            Recipient::ParentsCounselors => "Parents/Counselors",
        }
    }
}

/// One attempted notification dispatch (the log records attempts, not
/// confirmed deliveries)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEntry {
    /// Wall-clock time of the attempt, HH:MM:SS
    pub time: String,
    pub recipient: Recipient,
}

/// Default number of outstanding wellness follow-ups per incident
pub const WELLNESS_CHECKS_DEFAULT: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    /// Unique for the lifetime of the process, immutable
    pub id: Uuid,

    /// Category label, e.g. "Confirmed Live Violence"
    pub incident_type: String,

    /// Camera name or uploaded file identifier
    pub location: String,

    pub status: IncidentStatus,

    /// Creation time, immutable; secondary sort key for display
    pub timestamp: DateTime<Utc>,

    /// Triggering detection confidence, 0-100, immutable
    pub confidence_score: u8,

    /// Always equals `notification_log.len()`
    pub notifications_sent: u32,

    /// Outstanding follow-up obligations. The check-in workflow that
    /// decrements this is not built yet; the field is the extension point.
    pub wellness_checks_required: u32,

    /// Derived summary, immutable
    pub description: String,

    /// Append-only, one entry per dispatch attempt
    pub notification_log: Vec<NotificationEntry>,
}
