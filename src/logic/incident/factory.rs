//! Incident Factory
//!
//! Converts a triggering detection into a fresh incident record with
//! deterministic defaults. The only non-pure inputs are wall-clock time
//! and the fresh id; `create_at` pins both for tests.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::types::{Incident, IncidentStatus, WELLNESS_CHECKS_DEFAULT};

pub fn create(incident_type: &str, location: &str, score: u8) -> Incident {
    create_at(incident_type, location, score, Utc::now(), Uuid::new_v4())
}

pub fn create_at(
    incident_type: &str,
    location: &str,
    score: u8,
    now: DateTime<Utc>,
    id: Uuid,
) -> Incident {
    Incident {
        id,
        incident_type: incident_type.to_string(),
        location: location.to_string(),
        status: IncidentStatus::New,
        timestamp: now,
        confidence_score: score,
        notifications_sent: 0,
        wellness_checks_required: WELLNESS_CHECKS_DEFAULT,
        description: format!(
            "Deep Learning Model detected {} at {} with {}% confidence.",
            incident_type, location, score
        ),
        notification_log: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let inc = create("Image Upload Violence", "File: fight.jpg", 88);
        assert_eq!(inc.status, IncidentStatus::New);
        assert_eq!(inc.notifications_sent, 0);
        assert_eq!(inc.wellness_checks_required, 2);
        assert!(inc.notification_log.is_empty());
        assert_eq!(inc.confidence_score, 88);
    }

    #[test]
    fn test_create_is_deterministic_given_inputs() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let a = create_at("Confirmed Live Violence", "Live Camera Feed", 95, now, id);
        let b = create_at("Confirmed Live Violence", "Live Camera Feed", 95, now, id);
        assert_eq!(a.id, b.id);
        assert_eq!(a.timestamp, b.timestamp);
        assert_eq!(a.description, b.description);
        assert_eq!(
            a.description,
            "Deep Learning Model detected Confirmed Live Violence at Live Camera Feed with 95% confidence."
        );
    }
}
