//! Risk Zone Registry
//!
//! Static list of campus locations with a risk score and trend, plus the
//! recommended staffing action. Display-only; independent of the incident
//! store.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskZone {
    /// Identity key
    pub location: String,
    /// Risk score, 0-100
    pub score: u8,
    pub trend: Trend,
}

impl RiskZone {
    fn new(location: &str, score: u8, trend: Trend) -> Self {
        Self {
            location: location.to_string(),
            score,
            trend,
        }
    }
}

/// Staffing recommendation derived from the zone score
pub fn recommended_action(zone: &RiskZone) -> &'static str {
    if zone.score > 90 {
        "Deploy staff immediately"
    } else {
        "Increase casual presence"
    }
}

pub struct RiskZoneRegistry {
    zones: Vec<RiskZone>,
}

impl RiskZoneRegistry {
    /// Seed data from the behavioral/environmental risk assessment
    pub fn seeded() -> Self {
        Self {
            zones: vec![
                RiskZone::new("Cafeteria Exit", 92, Trend::Up),
                RiskZone::new("Back Parking Lot", 85, Trend::Up),
                RiskZone::new("4th Floor Hallway", 65, Trend::Down),
            ],
        }
    }

    pub fn list(&self) -> &[RiskZone] {
        &self.zones
    }
}

impl Default for RiskZoneRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_boundary() {
        let hot = RiskZone::new("Cafeteria Exit", 91, Trend::Up);
        let warm = RiskZone::new("Back Parking Lot", 90, Trend::Up);
        assert_eq!(recommended_action(&hot), "Deploy staff immediately");
        assert_eq!(recommended_action(&warm), "Increase casual presence");
    }

    #[test]
    fn test_seeded_zones() {
        let registry = RiskZoneRegistry::seeded();
        assert_eq!(registry.list().len(), 3);
        assert_eq!(registry.list()[0].location, "Cafeteria Exit");
        assert_eq!(registry.list()[2].trend, Trend::Down);
    }
}
