//! Campus Sentinel Server
//!
//! Demonstration backend for a campus safety monitoring dashboard: a
//! simulated violence-detection signal feeds an incident lifecycle engine
//! with alert escalation and follow-up workflows.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   CAMPUS SENTINEL                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌────────────────────┐  │
//! │  │  API      │  │  Detection   │  │  Incident Engine   │  │
//! │  │  (Axum)   │─▶│  Signals     │─▶│  (store + latch +  │  │
//! │  │           │  │  (simulated) │  │   escalation)      │  │
//! │  └───────────┘  └──────────────┘  └─────────┬──────────┘  │
//! │                                             ▼             │
//! │                                   ┌──────────────────┐    │
//! │                                   │ Notification Sink│    │
//! │                                   └──────────────────┘    │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod logic;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::incident::IncidentEngine;
use logic::notify::{Dispatcher, EmailAlertSink, NotificationSink, WebhookSink};
use logic::risk::RiskZoneRegistry;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "campus_sentinel=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Campus Sentinel Server starting...");

    // Pick the alert sink: webhook if configured, else the simulated
    // email channel
    let sink: Box<dyn NotificationSink> = match &config.alert_webhook_url {
        Some(url) => {
            tracing::info!("Alerts via webhook: {}", url);
            Box::new(WebhookSink::new(url))
        }
        None => {
            tracing::info!("Alerts via simulated email to {}", config.alert_recipient);
            Box::new(EmailAlertSink::new(&config.alert_recipient))
        }
    };

    // Build application state
    let state = AppState {
        engine: Arc::new(IncidentEngine::new(Dispatcher::new(sink))),
        risk_zones: Arc::new(RiskZoneRegistry::seeded()),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<IncidentEngine>,
    pub risk_zones: Arc<RiskZoneRegistry>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))

        // Incidents
        .route("/api/v1/incidents", get(handlers::incidents::list))
        .route("/api/v1/incidents", post(handlers::incidents::confirm))
        .route("/api/v1/incidents/active", get(handlers::incidents::active))
        .route("/api/v1/incidents/:id", get(handlers::incidents::get))
        .route("/api/v1/incidents/:id/status", put(handlers::incidents::update_status))
        .route("/api/v1/incidents/:id/notify", post(handlers::incidents::notify))

        // Detection
        .route("/api/v1/detection/live/poll", post(handlers::detection::poll_live))
        .route("/api/v1/detection/live/session", post(handlers::detection::reset_session))
        .route("/api/v1/detection/assets", post(handlers::detection::analyze_asset))

        // Risk zones
        .route("/api/v1/risk-zones", get(handlers::risk_zones::list))

        // Notifications
        .route("/api/v1/notifications/stats", get(handlers::incidents::dispatch_stats))

        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
