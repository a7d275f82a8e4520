//! Risk zone handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::risk::{recommended_action, Trend};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RiskZoneView {
    pub location: String,
    pub score: u8,
    pub trend: Trend,
    pub recommendation: &'static str,
}

/// List proactive de-escalation zones with their recommended action
pub async fn list(State(state): State<AppState>) -> Json<Vec<RiskZoneView>> {
    let zones = state
        .risk_zones
        .list()
        .iter()
        .map(|zone| RiskZoneView {
            location: zone.location.clone(),
            score: zone.score,
            trend: zone.trend,
            recommendation: recommended_action(zone),
        })
        .collect();

    Json(zones)
}
