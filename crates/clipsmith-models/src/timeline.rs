//! The fused score timeline.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::signal::SignalKind;

/// One point on the fused score timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScorePoint {
    /// Absolute time in seconds
    pub timestamp: f64,

    /// Fused score in `[0, 1]`
    pub score: f64,

    /// Per-kind share of the score at this point (weights already applied).
    /// Only kinds with data for this video appear here.
    pub contributions: BTreeMap<SignalKind, f64>,
}

/// Dense score timeline sampled at a fixed step across the whole video.
///
/// Invariant: points form a contiguous grid `0, step, 2*step, ...` covering
/// `[0, video_duration]` with no gaps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoreTimeline {
    /// Grid step in seconds
    pub step: f64,

    /// Grid points, ordered by timestamp
    pub points: Vec<ScorePoint>,
}

impl ScoreTimeline {
    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the timeline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Scores as a flat slice-backed vector, in grid order.
    pub fn scores(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.score).collect()
    }
}
