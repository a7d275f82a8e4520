//! Live Stream Detector
//!
//! Simulates the deep-learning model running over a live camera feed:
//! the score ramps monotonically one point per polled frame, is held once
//! it caps, and the over-threshold flag latches true for the rest of the
//! session after the score first reaches the live threshold.

use super::rules::DetectionThresholds;
use super::types::{Annotation, DetectionEvent, SourceKind};

// Overlay labels for the latching frame and the frames after it
const DETECTED_LABEL: &str = "VIOLENCE DETECTED";
const ACTIVE_LABEL: &str = "ALERT ACTIVE";

pub struct StreamDetector {
    thresholds: DetectionThresholds,
    source_label: String,
    frame_counter: u8,
    score: u8,
    triggered: bool,
    just_latched: bool,
}

impl StreamDetector {
    pub fn new(source_label: &str) -> Self {
        Self::with_thresholds(source_label, DetectionThresholds::default())
    }

    pub fn with_thresholds(source_label: &str, thresholds: DetectionThresholds) -> Self {
        Self {
            thresholds,
            source_label: source_label.to_string(),
            frame_counter: 0,
            score: 0,
            triggered: false,
            just_latched: false,
        }
    }

    /// One poll = one frame. The score ramps until the counter caps at 100,
    /// then the last value is held.
    pub fn poll(&mut self) -> DetectionEvent {
        if self.frame_counter < 100 {
            self.score = self.frame_counter.min(100);
            self.frame_counter += 1;
        }

        if self.score >= self.thresholds.live && !self.triggered {
            log::warn!(
                "[{}] live detection latched at score {}%",
                self.source_label,
                self.score
            );
            self.triggered = true;
            self.just_latched = true;
        } else {
            self.just_latched = false;
        }

        DetectionEvent {
            score: self.score,
            triggered: self.triggered,
            source_kind: SourceKind::Live,
            source_label: self.source_label.clone(),
        }
    }

    /// Box overlay for the current frame, present only once latched.
    /// The label flips from "detected" to "active" on frames after the one
    /// that latched.
    pub fn annotation(&self) -> Option<Annotation> {
        if !self.triggered {
            return None;
        }
        let label = if self.just_latched { DETECTED_LABEL } else { ACTIVE_LABEL };
        Some(Annotation::live(label))
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Start a new detection session (new camera session resets the latch)
    pub fn reset(&mut self) {
        self.frame_counter = 0;
        self.score = 0;
        self.triggered = false;
        self.just_latched = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ramps_monotonically() {
        let mut d = StreamDetector::new("Live Camera Feed");
        let mut last = 0;
        for _ in 0..100 {
            let ev = d.poll();
            assert!(ev.score >= last);
            last = ev.score;
        }
    }

    #[test]
    fn test_trigger_latches_at_threshold() {
        let mut d = StreamDetector::new("Live Camera Feed");
        let mut first_trigger_score = None;
        for _ in 0..100 {
            let ev = d.poll();
            if ev.triggered && first_trigger_score.is_none() {
                first_trigger_score = Some(ev.score);
            }
        }
        assert_eq!(first_trigger_score, Some(90));
    }

    #[test]
    fn test_trigger_stays_latched_and_score_held() {
        let mut d = StreamDetector::new("Live Camera Feed");
        for _ in 0..150 {
            d.poll();
        }
        let ev = d.poll();
        assert!(ev.triggered);
        assert_eq!(ev.score, 99); // counter caps, last ramp value held

        let ev2 = d.poll();
        assert_eq!(ev2.score, ev.score);
        assert!(ev2.triggered);
    }

    #[test]
    fn test_reset_clears_latch() {
        let mut d = StreamDetector::new("Live Camera Feed");
        for _ in 0..100 {
            d.poll();
        }
        assert!(d.is_triggered());

        d.reset();
        assert!(!d.is_triggered());
        let ev = d.poll();
        assert_eq!(ev.score, 0);
        assert!(!ev.triggered);
    }
}
