//! Engine Logic
//!
//! Detection signal sources, the incident lifecycle engine, notification
//! dispatch, and the risk zone registry. The HTTP layer is a thin
//! projection over this module.

pub mod detection;
pub mod incident;
pub mod notify;
pub mod risk;

use thiserror::Error;
use uuid::Uuid;

/// Engine-level errors. All of these are recoverable; nothing in the
/// engine is fatal to the process.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Operator action referenced an incident no longer in the store
    #[error("Incident {0} not found")]
    IncidentNotFound(Uuid),

    /// Uploaded file is neither an image nor a video we accept
    #[error("Unsupported file type: {0}")]
    InvalidAsset(String),
}
