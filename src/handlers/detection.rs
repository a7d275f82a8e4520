//! Detection handlers
//!
//! Live-feed ticks and one-shot asset analysis. The video path keeps the
//! simulated processing pause before producing its verdict.

use std::time::Duration;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::logic::detection::{Annotation, AssetKind, SourceKind};
use crate::logic::incident::Incident;
use crate::{AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct LivePollResponse {
    pub score: u8,
    pub triggered: bool,
    pub annotation: Option<Annotation>,
    /// Present only on the tick that created an incident
    pub incident: Option<Incident>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeAssetRequest {
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct AssetAnalysisResponse {
    pub source_kind: SourceKind,
    pub source_label: String,
    pub score: u8,
    pub triggered: bool,
    pub annotation: Option<Annotation>,
}

/// One tick of the live detection loop
pub async fn poll_live(State(state): State<AppState>) -> Json<LivePollResponse> {
    let outcome = state.engine.poll_live();
    Json(LivePollResponse {
        score: outcome.event.score,
        triggered: outcome.event.triggered,
        annotation: outcome.annotation,
        incident: outcome.incident,
    })
}

/// Start a fresh camera session (disarms the trigger latch)
pub async fn reset_session(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.engine.reset_live_session();
    Json(serde_json::json!({ "status": "session_reset" }))
}

/// Score an uploaded image or video
pub async fn analyze_asset(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeAssetRequest>,
) -> AppResult<Json<AssetAnalysisResponse>> {
    if AssetKind::from_file_name(&req.file_name) == Some(AssetKind::Video)
        && state.config.video_analysis_delay_secs > 0
    {
        // Simulated footage-scan time; not cancellable mid-pause
        tokio::time::sleep(Duration::from_secs(state.config.video_analysis_delay_secs)).await;
    }

    let analysis = state.engine.analyze_asset(&req.file_name)?;
    Ok(Json(AssetAnalysisResponse {
        source_kind: analysis.event.source_kind,
        source_label: analysis.event.source_label,
        score: analysis.event.score,
        triggered: analysis.event.triggered,
        annotation: analysis.annotation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::logic::incident::IncidentEngine;
    use crate::logic::notify::{Dispatcher, EmailAlertSink};
    use crate::logic::risk::RiskZoneRegistry;
    use crate::AppError;

    fn state() -> AppState {
        let mut config = Config::from_env();
        config.video_analysis_delay_secs = 0;
        AppState {
            engine: Arc::new(IncidentEngine::new(Dispatcher::new(Box::new(
                EmailAlertSink::new("security@university.edu"),
            )))),
            risk_zones: Arc::new(RiskZoneRegistry::seeded()),
            config,
        }
    }

    #[tokio::test]
    async fn test_video_extension_routes_through_one_classifier() {
        // Uppercase extension: the delay gate and the scorer must agree
        let req = AnalyzeAssetRequest {
            file_name: "CAMPUS.MOV".to_string(),
        };
        let Json(resp) = analyze_asset(State(state()), Json(req)).await.unwrap();
        assert_eq!(resp.source_kind, SourceKind::Video);
        assert_eq!(resp.source_label, "Video: CAMPUS.MOV");
    }

    #[tokio::test]
    async fn test_unsupported_upload_is_rejected() {
        let req = AnalyzeAssetRequest {
            file_name: "notes.pdf".to_string(),
        };
        let err = analyze_asset(State(state()), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidAsset(_)));
    }
}
