//! Incident handlers
//!
//! The presentation layer's only writes into the engine: status updates,
//! manual alerts, and operator-confirmed one-shot incident logging.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::logic::incident::{Incident, IncidentStatus};
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: IncidentStatus,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmIncidentRequest {
    pub incident_type: String,
    pub location: String,
    pub score: u8,
}

/// List incidents in display order
pub async fn list(State(state): State<AppState>) -> Json<Vec<Incident>> {
    Json(state.engine.incidents())
}

/// Get a single incident
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Incident>> {
    let incident = state
        .engine
        .incident(id)
        .ok_or_else(|| AppError::NotFound("Incident not found".to_string()))?;

    Ok(Json(incident))
}

/// Currently selected incident for the detail view
pub async fn active(State(state): State<AppState>) -> Json<Option<Incident>> {
    Json(state.engine.active_incident())
}

/// Update incident status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> AppResult<Json<Incident>> {
    let incident = state.engine.set_status(id, req.status)?;
    Ok(Json(incident))
}

/// Send a tactical alert for an incident
pub async fn notify(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Incident>> {
    let incident = state.engine.notify(id)?;
    Ok(Json(incident))
}

/// Log an operator-confirmed incident from an analyzed upload
pub async fn confirm(
    State(state): State<AppState>,
    Json(req): Json<ConfirmIncidentRequest>,
) -> AppResult<Json<Incident>> {
    if req.score > 100 {
        return Err(AppError::ValidationError(
            "Confidence score must be 0-100".to_string(),
        ));
    }
    if req.incident_type.trim().is_empty() || req.location.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Incident type and location are required".to_string(),
        ));
    }

    let incident = state
        .engine
        .log_asset_incident(&req.incident_type, &req.location, req.score);
    Ok(Json(incident))
}

/// Dispatcher delivery stats
pub async fn dispatch_stats(
    State(state): State<AppState>,
) -> Json<crate::logic::notify::DispatchStats> {
    Json(state.engine.dispatch_stats())
}
