//! Subtitle cues for word-by-word highlight rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single word cue with clip-relative timestamps.
///
/// Times are rebased so the owning clip starts at 0. Cue sequences are
/// ordered and preserve the original word boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubtitleCue {
    /// The word to display
    pub word: String,

    /// Clip-relative start time in seconds
    pub start: f64,

    /// Clip-relative end time in seconds
    pub end: f64,
}

impl SubtitleCue {
    /// Create a new cue.
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }
}

/// A display line of grouped cues, for renderers that draw a full line with
/// one word highlighted at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CueLine {
    /// Full line text, words joined by single spaces
    pub text: String,

    /// Clip-relative start of the first word
    pub start: f64,

    /// Clip-relative end of the last word
    pub end: f64,

    /// The word cues making up this line, in display order
    pub words: Vec<SubtitleCue>,
}
