//! Engine configuration.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::signal::SignalKind;

/// Highlight engine configuration.
///
/// The engine assumes a validated configuration; callers must run
/// [`EngineConfig::validate`] at the boundary before handing it in.
/// Out-of-range values are rejected, never silently clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EngineConfig {
    /// Desired number of clips per video (1 to 5)
    pub clip_count: u32,

    /// Minimum clip duration in seconds (10 to 30)
    pub min_duration: f64,

    /// Maximum clip duration in seconds (30 to 60)
    pub max_duration: f64,

    /// Per-signal fusion weights. All must be >= 0, not all zero.
    /// Weights are renormalized over the signals present for a given video.
    pub signal_weights: BTreeMap<SignalKind, f64>,

    /// Trigger keywords and phrases for the keyword-density signal.
    /// Matched case-insensitively against whole words.
    pub keywords: Vec<String>,

    /// Score timeline grid step in seconds (> 0)
    pub sample_step: f64,

    /// Minimum score a local peak must clear to seed a candidate (0 to 1)
    pub peak_threshold: f64,

    /// How long an impulse's influence lingers after its timestamp (seconds)
    pub decay_window: f64,

    /// Half-width of the keyword-density counting window (seconds)
    pub keyword_window: f64,

    /// Words per subtitle display line
    pub words_per_line: usize,

    /// Maximum distance for snapping clip boundaries to word boundaries (seconds)
    pub snap_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            clip_count: 3,
            min_duration: 15.0,
            max_duration: 60.0,
            signal_weights: default_weights(),
            keywords: default_keywords(),
            sample_step: 1.0,
            peak_threshold: 0.2,
            decay_window: 5.0,
            keyword_window: 5.0,
            words_per_line: 4,
            snap_tolerance: 2.0,
        }
    }
}

fn default_weights() -> BTreeMap<SignalKind, f64> {
    BTreeMap::from([
        (SignalKind::AudioEnergy, 0.4),
        (SignalKind::KeywordDensity, 0.3),
        (SignalKind::SceneChange, 0.2),
        (SignalKind::ChapterMarker, 0.1),
    ])
}

fn default_keywords() -> Vec<String> {
    [
        "wait", "listen", "actually", "insane", "crazy", "no way", "what", "omg", "wow",
        "legendary", "fail", "win", "sick", "bro", "literally", "shocking", "unbelievable",
        "secret", "wait for it", "you won't believe", "fire", "goat", "clutch", "let's go",
        "no", "yes", "really", "seriously", "warte", "krass", "unfassbar", "unmöglich",
        "ehrlich",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl EngineConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let mut weights = defaults.signal_weights.clone();
        for (kind, var) in [
            (SignalKind::AudioEnergy, "AUDIO_ENERGY_WEIGHT"),
            (SignalKind::KeywordDensity, "KEYWORD_WEIGHT"),
            (SignalKind::SceneChange, "SCENE_CHANGE_WEIGHT"),
            (SignalKind::ChapterMarker, "CHAPTER_MARKER_WEIGHT"),
        ] {
            if let Some(value) = std::env::var(var).ok().and_then(|s| s.parse().ok()) {
                weights.insert(kind, value);
            }
        }

        Self {
            clip_count: std::env::var("MAX_CLIPS_PER_VIDEO")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.clip_count),
            min_duration: std::env::var("CLIP_MIN_DURATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_duration),
            max_duration: std::env::var("CLIP_MAX_DURATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_duration),
            signal_weights: weights,
            sample_step: std::env::var("SAMPLE_STEP")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.sample_step),
            ..defaults
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.clip_count) {
            return Err(format!(
                "clip_count must be between 1 and 5, got {}",
                self.clip_count
            ));
        }

        if !(10.0..=30.0).contains(&self.min_duration) {
            return Err(format!(
                "min_duration must be between 10 and 30 seconds, got {}",
                self.min_duration
            ));
        }

        if !(30.0..=60.0).contains(&self.max_duration) {
            return Err(format!(
                "max_duration must be between 30 and 60 seconds, got {}",
                self.max_duration
            ));
        }

        if self.min_duration > self.max_duration {
            return Err(format!(
                "min_duration ({}) exceeds max_duration ({})",
                self.min_duration, self.max_duration
            ));
        }

        if self.signal_weights.is_empty() {
            return Err("signal_weights must not be empty".to_string());
        }

        if let Some((kind, weight)) = self.signal_weights.iter().find(|(_, w)| **w < 0.0) {
            return Err(format!("weight for {} must be >= 0, got {}", kind, weight));
        }

        if self.signal_weights.values().sum::<f64>() <= 0.0 {
            return Err("signal_weights must not all be zero".to_string());
        }

        if self.sample_step <= 0.0 {
            return Err(format!("sample_step must be > 0, got {}", self.sample_step));
        }

        if !(0.0..=1.0).contains(&self.peak_threshold) {
            return Err(format!(
                "peak_threshold must be between 0 and 1, got {}",
                self.peak_threshold
            ));
        }

        if self.decay_window < 0.0 {
            return Err(format!(
                "decay_window must be >= 0, got {}",
                self.decay_window
            ));
        }

        if self.keyword_window < 0.0 {
            return Err(format!(
                "keyword_window must be >= 0, got {}",
                self.keyword_window
            ));
        }

        if self.words_per_line == 0 {
            return Err("words_per_line must be >= 1".to_string());
        }

        if self.snap_tolerance < 0.0 {
            return Err(format!(
                "snap_tolerance must be >= 0, got {}",
                self.snap_tolerance
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_weights_cover_all_kinds() {
        let config = EngineConfig::default();
        for kind in SignalKind::ALL {
            assert!(config.signal_weights.contains_key(&kind));
        }
    }

    #[test]
    fn test_rejects_zero_clip_count() {
        let config = EngineConfig {
            clip_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_durations() {
        let config = EngineConfig {
            min_duration: 5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            max_duration: 90.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        let config = EngineConfig {
            signal_weights: SignalKind::ALL.into_iter().map(|k| (k, 0.0)).collect(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut weights = EngineConfig::default().signal_weights;
        weights.insert(SignalKind::SceneChange, -0.1);
        let config = EngineConfig {
            signal_weights: weights,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_sample_step() {
        let config = EngineConfig {
            sample_step: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
