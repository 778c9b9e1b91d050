//! Selected clips handed to the rendering collaborators.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::cue::SubtitleCue;
use crate::signal::SignalKind;

/// A candidate chosen by the selector, ready for encoding and styling.
///
/// Rank runs 1..N in score order (1 = highest score); the output list itself
/// is sorted by `start` ascending so presentation follows video chronology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SelectedClip {
    /// 1-based rank in score order
    pub rank: u32,

    /// Clip start in seconds
    pub start: f64,

    /// Clip end in seconds
    pub end: f64,

    /// Mean fused score over the clip window
    pub score: f64,

    /// The signal that dominated this window (label only)
    pub dominant_signal: SignalKind,

    /// Word cues covering the clip span, clip-relative and ordered
    pub cues: Vec<SubtitleCue>,
}

impl SelectedClip {
    /// Promote a candidate to a selected clip with the given rank.
    pub fn from_candidate(rank: u32, candidate: Candidate) -> Self {
        Self {
            rank,
            start: candidate.start,
            end: candidate.end,
            score: candidate.score,
            dominant_signal: candidate.dominant_signal,
            cues: Vec::new(),
        }
    }

    /// Attach subtitle cues, replacing any existing ones.
    pub fn with_cues(mut self, cues: Vec<SubtitleCue>) -> Self {
        self.cues = cues;
        self
    }

    /// Clip duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether this clip shares any time range with another.
    pub fn overlaps(&self, other: &SelectedClip) -> bool {
        self.start < other.end && other.start < self.end
    }
}
