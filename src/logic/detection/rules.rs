//! Detection Thresholds & Scoring Policy
//!
//! Constants and config only - no scoring logic here.

use serde::{Deserialize, Serialize};

use super::types::{AssetKind, SourceKind};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Live stream score at or above this latches a detection
pub const LIVE_TRIGGER_THRESHOLD: u8 = 90;

/// Uploaded images trigger at or above this score
pub const IMAGE_TRIGGER_THRESHOLD: u8 = 80;

/// Uploaded videos trigger at or above this score.
/// NOTE: the video draw range below starts at this value, so a video
/// analysis can never come back negative. Kept for compatibility with the
/// reference policy; it is a placeholder range, not a tuned one.
pub const VIDEO_TRIGGER_THRESHOLD: u8 = 85;

/// Confidence recorded on incidents created by the live path
pub const LIVE_INCIDENT_SCORE: u8 = 95;

// ============================================================================
// SIMULATED SCORE RANGES (inclusive)
// ============================================================================

pub const IMAGE_SCORE_RANGE: (u8, u8) = (70, 100);
pub const VIDEO_SCORE_RANGE: (u8, u8) = (85, 99);

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Per-source trigger thresholds (configurable for tests/tuning)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionThresholds {
    pub live: u8,
    pub image: u8,
    pub video: u8,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            live: LIVE_TRIGGER_THRESHOLD,
            image: IMAGE_TRIGGER_THRESHOLD,
            video: VIDEO_TRIGGER_THRESHOLD,
        }
    }
}

impl DetectionThresholds {
    pub fn for_source(&self, kind: SourceKind) -> u8 {
        match kind {
            SourceKind::Live => self.live,
            SourceKind::Image => self.image,
            SourceKind::Video => self.video,
        }
    }

    /// Over-threshold check for a one-shot asset score
    pub fn asset_triggered(&self, kind: AssetKind, score: u8) -> bool {
        score >= self.for_source(kind.as_source_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_boundary() {
        let t = DetectionThresholds::default();
        assert!(t.asset_triggered(AssetKind::Image, 80));
        assert!(!t.asset_triggered(AssetKind::Image, 79));
    }

    #[test]
    fn test_video_boundary() {
        let t = DetectionThresholds::default();
        assert!(t.asset_triggered(AssetKind::Video, 85));
        assert!(!t.asset_triggered(AssetKind::Video, 84));
    }

    #[test]
    fn test_video_range_cannot_miss() {
        // Documented quirk: every drawable video score triggers
        let t = DetectionThresholds::default();
        for score in VIDEO_SCORE_RANGE.0..=VIDEO_SCORE_RANGE.1 {
            assert!(t.asset_triggered(AssetKind::Video, score));
        }
    }
}
