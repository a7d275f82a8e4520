//! Detection Signal Types
//!
//! Ephemeral events produced by the simulated violence-detection model.
//! The engine only ever consumes the score and the over-threshold flag;
//! annotations are rendering data passed through to the presentation layer.

use serde::{Deserialize, Serialize};

/// Origin of a detection signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Live,
    Image,
    Video,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Live => "live",
            SourceKind::Image => "image",
            SourceKind::Video => "video",
        }
    }
}

/// Kind of an uploaded asset, inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Image,
    Video,
}

impl AssetKind {
    /// Classify an uploaded file by extension. `None` means the file is
    /// neither an image nor a video we accept.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit('.').next()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" => Some(AssetKind::Image),
            "mp4" | "mov" => Some(AssetKind::Video),
            _ => None,
        }
    }

    pub fn as_source_kind(&self) -> SourceKind {
        match self {
            AssetKind::Image => SourceKind::Image,
            AssetKind::Video => SourceKind::Video,
        }
    }
}

/// One detection signal: a confidence score plus the derived
/// over-threshold flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionEvent {
    /// Confidence score, 0-100
    pub score: u8,

    /// True once the score crossed the policy threshold for this source
    pub triggered: bool,

    pub source_kind: SourceKind,

    /// Camera name or uploaded file identifier
    pub source_label: String,
}

/// Bounding box + label drawn over the triggering frame/asset.
/// Pure rendering side effect; has no bearing on engine decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub label: String,
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Annotation {
    /// Box drawn on the live feed once a detection latches
    pub fn live(label: &str) -> Self {
        Self {
            label: label.to_string(),
            x1: 200,
            y1: 150,
            x2: 450,
            y2: 350,
        }
    }

    /// Box drawn on an uploaded image that triggered
    pub fn image(label: &str) -> Self {
        Self {
            label: label.to_string(),
            x1: 100,
            y1: 100,
            x2: 500,
            y2: 400,
        }
    }
}

/// Result of scoring an uploaded asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetAnalysis {
    pub event: DetectionEvent,
    pub annotation: Option<Annotation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_from_file_name() {
        assert_eq!(AssetKind::from_file_name("fight.jpg"), Some(AssetKind::Image));
        assert_eq!(AssetKind::from_file_name("FIGHT.PNG"), Some(AssetKind::Image));
        assert_eq!(AssetKind::from_file_name("hall.jpeg"), Some(AssetKind::Image));
        assert_eq!(AssetKind::from_file_name("cctv.mp4"), Some(AssetKind::Video));
        assert_eq!(AssetKind::from_file_name("clip.mov"), Some(AssetKind::Video));
    }

    #[test]
    fn test_asset_kind_rejects_unsupported() {
        assert_eq!(AssetKind::from_file_name("notes.pdf"), None);
        assert_eq!(AssetKind::from_file_name("archive.zip"), None);
        assert_eq!(AssetKind::from_file_name("noextension"), None);
    }
}
