//! Incident Lifecycle
//!
//! Store, factory, and the lifecycle engine that turns detection signals
//! into tracked incidents with notification workflows.

pub mod controller;
pub mod factory;
pub mod store;
pub mod types;


pub use controller::{IncidentEngine, LivePollOutcome, LIVE_CAMERA_LABEL, LIVE_INCIDENT_TYPE};
pub use types::{Incident, IncidentStatus, NotificationEntry, Recipient};
