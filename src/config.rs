//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Mailbox the simulated email sink hands alerts to
    pub alert_recipient: String,

    /// Optional webhook URL; when set, alerts go out over HTTP instead
    /// of the simulated email channel
    pub alert_webhook_url: Option<String>,

    /// Simulated processing pause before a video verdict, in seconds
    pub video_analysis_delay_secs: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            alert_recipient: env::var("ALERT_RECIPIENT")
                .unwrap_or_else(|_| "security@university.edu".to_string()),

            alert_webhook_url: env::var("ALERT_WEBHOOK_URL").ok().filter(|u| !u.is_empty()),

            video_analysis_delay_secs: env::var("VIDEO_ANALYSIS_DELAY_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
