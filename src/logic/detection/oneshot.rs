//! One-Shot Asset Analysis
//!
//! Scores a single uploaded image or video. The confidence draw simulates
//! the detection model; classification is split out so the threshold
//! boundaries stay deterministic for tests.

use rand::Rng;

use super::rules::{DetectionThresholds, IMAGE_SCORE_RANGE, VIDEO_SCORE_RANGE};
use super::types::{Annotation, AssetAnalysis, AssetKind, DetectionEvent};
use crate::logic::EngineError;

/// Draw a simulated confidence score for an asset kind
pub fn score_asset<R: Rng>(rng: &mut R, kind: AssetKind) -> u8 {
    let (lo, hi) = match kind {
        AssetKind::Image => IMAGE_SCORE_RANGE,
        AssetKind::Video => VIDEO_SCORE_RANGE,
    };
    rng.gen_range(lo..=hi)
}

/// Analyze an uploaded file. Fails with `InvalidAsset` when the file is
/// neither image nor video; no incident-creation control is offered then.
pub fn analyze_asset(file_name: &str, thresholds: &DetectionThresholds) -> Result<AssetAnalysis, EngineError> {
    let kind = AssetKind::from_file_name(file_name)
        .ok_or_else(|| EngineError::InvalidAsset(file_name.to_string()))?;

    let score = score_asset(&mut rand::thread_rng(), kind);
    Ok(classify_asset(kind, file_name, score, thresholds))
}

/// Classification step, deterministic given the score
pub fn classify_asset(
    kind: AssetKind,
    file_name: &str,
    score: u8,
    thresholds: &DetectionThresholds,
) -> AssetAnalysis {
    let triggered = thresholds.asset_triggered(kind, score);

    let source_label = match kind {
        AssetKind::Image => format!("File: {}", file_name),
        AssetKind::Video => format!("Video: {}", file_name),
    };

    if triggered {
        log::warn!("[{}] violation detected, confidence {}%", source_label, score);
    } else {
        log::info!("[{}] no violation, confidence {}%", source_label, score);
    }

    // Only images get a drawn overlay; the video player shows the raw clip
    let annotation = match kind {
        AssetKind::Image if triggered => {
            Some(Annotation::image(&format!("VIOLENCE DETECTED ({}%)", score)))
        }
        _ => None,
    };

    AssetAnalysis {
        event: DetectionEvent {
            score,
            triggered,
            source_kind: kind.as_source_kind(),
            source_label,
        },
        annotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_score_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let s = score_asset(&mut rng, AssetKind::Image);
            assert!((70..=100).contains(&s));
        }
    }

    #[test]
    fn test_video_score_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let s = score_asset(&mut rng, AssetKind::Video);
            assert!((85..=99).contains(&s));
        }
    }

    #[test]
    fn test_image_boundary_classification() {
        let t = DetectionThresholds::default();

        let hit = classify_asset(AssetKind::Image, "fight.jpg", 80, &t);
        assert!(hit.event.triggered);
        assert!(hit.annotation.is_some());
        assert_eq!(hit.event.source_label, "File: fight.jpg");

        let miss = classify_asset(AssetKind::Image, "fight.jpg", 79, &t);
        assert!(!miss.event.triggered);
        assert!(miss.annotation.is_none());
    }

    #[test]
    fn test_video_has_no_annotation() {
        let t = DetectionThresholds::default();
        let hit = classify_asset(AssetKind::Video, "cctv.mp4", 99, &t);
        assert!(hit.event.triggered);
        assert!(hit.annotation.is_none());
        assert_eq!(hit.event.source_label, "Video: cctv.mp4");
    }

    #[test]
    fn test_analyze_rejects_unsupported_file() {
        let t = DetectionThresholds::default();
        let err = analyze_asset("notes.pdf", &t).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAsset(_)));
    }
}
