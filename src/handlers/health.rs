//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    /// Incidents tracked this session
    incidents_tracked: usize,
    /// Channel the dispatcher hands alerts to
    alert_channel: &'static str,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        incidents_tracked: state.engine.incident_count(),
        alert_channel: state.engine.alert_channel(),
    })
}
