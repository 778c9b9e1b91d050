//! Signal kinds, raw samples, and normalized signals.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The independent signal sources that get fused into one highlight score.
///
/// The `Ord` impl fixes a stable iteration order for maps keyed by kind,
/// which keeps fusion and dominant-signal tie-breaks deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    AudioEnergy,
    KeywordDensity,
    SceneChange,
    ChapterMarker,
}

impl SignalKind {
    /// All signal kinds, in canonical order.
    pub const ALL: [SignalKind; 4] = [
        SignalKind::AudioEnergy,
        SignalKind::KeywordDensity,
        SignalKind::SceneChange,
        SignalKind::ChapterMarker,
    ];

    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::AudioEnergy => "audio_energy",
            SignalKind::KeywordDensity => "keyword_density",
            SignalKind::SceneChange => "scene_change",
            SignalKind::ChapterMarker => "chapter_marker",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single time-indexed scalar measurement.
///
/// Sequences are ordered by timestamp (non-decreasing); unique timestamps are
/// not required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SignalSample {
    /// Absolute time in seconds
    pub timestamp: f64,

    /// Measured value (unitless; scale depends on the signal kind)
    pub value: f64,
}

impl SignalSample {
    /// Create a new sample.
    pub fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A signal rescaled to `[0, 1]` and resampled onto the fixed-step grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedSignal {
    /// Which signal this series came from
    pub kind: SignalKind,

    /// Grid-aligned samples with values in `[0, 1]`
    pub samples: Vec<SignalSample>,
}

impl NormalizedSignal {
    /// Whether the signal carries no data for this video.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A publisher-supplied chapter boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Chapter {
    /// Chapter start time in seconds
    pub start: f64,

    /// Chapter title
    pub title: String,
}

impl Chapter {
    /// Create a new chapter marker.
    pub fn new(start: f64, title: impl Into<String>) -> Self {
        Self {
            start,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str_matches_serde() {
        for kind in SignalKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_kind_ordering_is_canonical() {
        let mut kinds = vec![
            SignalKind::ChapterMarker,
            SignalKind::AudioEnergy,
            SignalKind::SceneChange,
            SignalKind::KeywordDensity,
        ];
        kinds.sort();
        assert_eq!(kinds, SignalKind::ALL.to_vec());
    }
}
