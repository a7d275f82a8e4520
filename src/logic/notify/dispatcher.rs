//! Notification Dispatcher
//!
//! Best-effort handoff of incident summaries to a configured sink.
//! Transport errors are caught and reported in the result; the lifecycle
//! controller decides what to do with a failed attempt.

use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use super::types::{DispatchError, DispatchResult, DispatchStats, IncidentSummary};

const MAX_HISTORY: usize = 100;

// ============================================================================
// SINKS
// ============================================================================

/// The only egress seam of the engine
pub trait NotificationSink: Send + Sync {
    /// Channel name recorded in dispatch logs
    fn name(&self) -> &'static str;

    fn send(&self, summary: &IncidentSummary) -> Result<String, DispatchError>;
}

/// Simulated SMTP handoff to a fixed security mailbox. Always succeeds
/// and performs no network I/O (reference behavior for the demo).
pub struct EmailAlertSink {
    recipient_address: String,
}

impl EmailAlertSink {
    pub fn new(recipient_address: &str) -> Self {
        Self {
            recipient_address: recipient_address.to_string(),
        }
    }
}

impl NotificationSink for EmailAlertSink {
    fn name(&self) -> &'static str {
        "Email Alert System"
    }

    fn send(&self, summary: &IncidentSummary) -> Result<String, DispatchError> {
        log::info!(
            "EMAIL ALERT sent to {} for incident {} ({} at {})",
            self.recipient_address,
            summary.incident_id,
            summary.incident_type,
            summary.location
        );
        Ok(format!("Sent to {}", self.recipient_address))
    }
}

/// Generic JSON webhook sink
pub struct WebhookSink {
    url: String,
}

impl WebhookSink {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string() }
    }
}

impl NotificationSink for WebhookSink {
    fn name(&self) -> &'static str {
        "Webhook Alert"
    }

    fn send(&self, summary: &IncidentSummary) -> Result<String, DispatchError> {
        let body = serde_json::json!({
            "title": format!("[Campus Sentinel] {}", summary.incident_type),
            "message": format!(
                "{} at {} ({}% confidence)",
                summary.incident_type, summary.location, summary.confidence_score
            ),
            "incident_id": summary.incident_id,
            "recipient": summary.recipient.as_str(),
        })
        .to_string();

        let response = ureq::post(&self.url)
            .set("Content-Type", "application/json")
            .send_string(&body);

        match response {
            Ok(resp) => Ok(format!("Webhook accepted ({})", resp.status())),
            Err(e) => Err(DispatchError::Network(e.to_string())),
        }
    }
}

// ============================================================================
// DISPATCHER
// ============================================================================

struct DispatchRecord {
    incident_id: Uuid,
    success: bool,
    timestamp: i64,
}

pub struct Dispatcher {
    sink: Box<dyn NotificationSink>,
    history: Mutex<Vec<DispatchRecord>>,
}

impl Dispatcher {
    pub fn new(sink: Box<dyn NotificationSink>) -> Self {
        Self {
            sink,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    /// Attempt a send. Never panics and never returns an error; sink
    /// failures come back inside the result.
    pub fn dispatch(&self, summary: &IncidentSummary) -> DispatchResult {
        let result = match self.sink.send(summary) {
            Ok(detail) => {
                log::info!(
                    "Alert for incident {} handed to {} ({})",
                    summary.incident_id,
                    self.sink.name(),
                    detail
                );
                DispatchResult {
                    ok: true,
                    detail,
                    error: None,
                }
            }
            Err(e) => {
                log::error!(
                    "Alert for incident {} failed via {}: {}",
                    summary.incident_id,
                    self.sink.name(),
                    e
                );
                DispatchResult {
                    ok: false,
                    detail: format!("{} unreachable", self.sink.name()),
                    error: Some(e.to_string()),
                }
            }
        };

        let mut history = self.history.lock();
        history.push(DispatchRecord {
            incident_id: summary.incident_id,
            success: result.ok,
            timestamp: Utc::now().timestamp(),
        });
        if history.len() > MAX_HISTORY {
            let overflow = history.len() - MAX_HISTORY;
            history.drain(0..overflow);
        }

        result
    }

    pub fn stats(&self) -> DispatchStats {
        let history = self.history.lock();
        let succeeded = history.iter().filter(|r| r.success).count();
        DispatchStats {
            attempted: history.len(),
            succeeded,
            failed: history.len() - succeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::incident::types::Recipient;

    fn summary() -> IncidentSummary {
        IncidentSummary {
            incident_id: Uuid::new_v4(),
            incident_type: "Image Upload Violence".to_string(),
            location: "File: fight.jpg".to_string(),
            confidence_score: 91,
            recipient: Recipient::AdminSecurity,
        }
    }

    struct FailingSink;

    impl NotificationSink for FailingSink {
        fn name(&self) -> &'static str {
            "Failing Sink"
        }

        fn send(&self, _summary: &IncidentSummary) -> Result<String, DispatchError> {
            Err(DispatchError::Network("connection refused".to_string()))
        }
    }

    #[test]
    fn test_email_sink_always_succeeds() {
        let dispatcher = Dispatcher::new(Box::new(EmailAlertSink::new("security@university.edu")));
        let result = dispatcher.dispatch(&summary());
        assert!(result.ok);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_sink_failure_is_reported_not_raised() {
        let dispatcher = Dispatcher::new(Box::new(FailingSink));
        let result = dispatcher.dispatch(&summary());
        assert!(!result.ok);
        assert!(result.error.unwrap().contains("connection refused"));
    }

    #[test]
    fn test_stats_count_outcomes() {
        let dispatcher = Dispatcher::new(Box::new(FailingSink));
        dispatcher.dispatch(&summary());
        dispatcher.dispatch(&summary());

        let stats = dispatcher.stats();
        assert_eq!(stats.attempted, 2);
        assert_eq!(stats.succeeded, 0);
        assert_eq!(stats.failed, 2);
    }
}
