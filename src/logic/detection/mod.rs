//! Detection Signal Source
//!
//! Simulated violence-detection model: a ramping live-stream signal and
//! one-shot scoring for uploaded assets. Everything downstream treats this
//! module as a black box producing `DetectionEvent`s.

pub mod oneshot;
pub mod rules;
pub mod stream;
pub mod types;

pub use rules::DetectionThresholds;
pub use stream::StreamDetector;
pub use types::{Annotation, AssetAnalysis, AssetKind, DetectionEvent, SourceKind};
