//! Notification Dispatch
//!
//! Sink abstraction + best-effort dispatcher. The engine calls this on
//! incident creation and on each manual "send alert" action.

pub mod dispatcher;
pub mod types;

pub use dispatcher::{Dispatcher, EmailAlertSink, NotificationSink, WebhookSink};
pub use types::{DispatchError, DispatchResult, DispatchStats, IncidentSummary};
