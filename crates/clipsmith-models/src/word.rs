//! Timestamped transcript words.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single transcribed word with absolute timestamps.
///
/// Produced by the external transcription collaborator. Word sequences are
/// ordered with monotonically non-decreasing `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimedWord {
    /// The word text as transcribed (may carry punctuation)
    pub text: String,

    /// Absolute start time in seconds
    pub start: f64,

    /// Absolute end time in seconds
    pub end: f64,

    /// Transcription confidence (0.0 to 1.0)
    pub confidence: f64,
}

impl TimedWord {
    /// Create a new timed word.
    pub fn new(text: impl Into<String>, start: f64, end: f64, confidence: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            confidence,
        }
    }

    /// Duration of the word in seconds.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Temporal midpoint of the word, used for clip boundary assignment.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let w = TimedWord::new("hello", 10.0, 11.0, 0.98);
        assert!((w.midpoint() - 10.5).abs() < 1e-9);
        assert!((w.duration() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_duration_never_negative() {
        let w = TimedWord::new("x", 5.0, 4.0, 1.0);
        assert_eq!(w.duration(), 0.0);
    }
}
