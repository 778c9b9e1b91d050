//! Candidate clip windows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::signal::SignalKind;

/// A provisional clip span with an aggregate score, not yet selected.
///
/// Invariants: `start < end`, duration within the configured
/// `[min_duration, max_duration]`, and the span lies inside video bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Candidate {
    /// Window start in seconds
    pub start: f64,

    /// Window end in seconds
    pub end: f64,

    /// Mean fused score over the window, in `[0, 1]`
    pub score: f64,

    /// The signal contributing the largest share of the window's score.
    /// Label only; never used for ranking.
    pub dominant_signal: SignalKind,
}

impl Candidate {
    /// Window duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether this window shares any time range with another.
    ///
    /// Touching endpoints (`self.end == other.start`) do not count as overlap.
    pub fn overlaps(&self, other: &Candidate) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(start: f64, end: f64) -> Candidate {
        Candidate {
            start,
            end,
            score: 0.5,
            dominant_signal: SignalKind::AudioEnergy,
        }
    }

    #[test]
    fn test_overlap_detection() {
        assert!(cand(0.0, 20.0).overlaps(&cand(10.0, 30.0)));
        assert!(cand(10.0, 30.0).overlaps(&cand(0.0, 20.0)));
        assert!(!cand(0.0, 20.0).overlaps(&cand(25.0, 45.0)));
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        assert!(!cand(0.0, 20.0).overlaps(&cand(20.0, 40.0)));
        assert!(!cand(20.0, 40.0).overlaps(&cand(0.0, 20.0)));
    }
}
