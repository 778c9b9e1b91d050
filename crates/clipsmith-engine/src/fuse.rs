//! Weighted signal fusion.
//!
//! Fuses the normalized signals into one continuous score timeline. Weights
//! are renormalized to sum to 1 over only the signals with data for this
//! video, so an absent channel (no chapters, no cuts) redistributes its
//! weight instead of dragging scores down. Same inputs always produce the
//! same timeline.

use std::collections::BTreeMap;

use tracing::debug;

use clipsmith_models::{NormalizedSignal, ScorePoint, ScoreTimeline, SignalKind};

use crate::error::{EngineError, EngineResult};
use crate::normalize::grid_len;

/// Fuse normalized signals into a dense score timeline.
///
/// Fails with [`EngineError::InsufficientSignal`] when no signal carries any
/// data, and [`EngineError::InvalidConfiguration`] when the signals present
/// have no weight between them.
pub fn fuse(
    signals: &BTreeMap<SignalKind, NormalizedSignal>,
    weights: &BTreeMap<SignalKind, f64>,
    video_duration: f64,
    step: f64,
) -> EngineResult<ScoreTimeline> {
    let present: Vec<&NormalizedSignal> =
        signals.values().filter(|s| !s.is_empty()).collect();

    if present.is_empty() {
        return Err(EngineError::InsufficientSignal);
    }

    let total_weight: f64 = present
        .iter()
        .map(|s| weights.get(&s.kind).copied().unwrap_or(0.0))
        .sum();

    if total_weight <= 0.0 {
        return Err(EngineError::invalid_configuration(
            "signals present for this video have zero total weight",
        ));
    }

    debug!(
        signals = present.len(),
        total_weight, "fusing signals with renormalized weights"
    );

    let n = grid_len(video_duration, step);
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let mut contributions = BTreeMap::new();
        let mut score = 0.0;
        for signal in &present {
            let weight = weights.get(&signal.kind).copied().unwrap_or(0.0) / total_weight;
            let value = signal.samples.get(i).map(|s| s.value).unwrap_or(0.0);
            let contribution = weight * value;
            score += contribution;
            contributions.insert(signal.kind, contribution);
        }
        points.push(ScorePoint {
            timestamp: i as f64 * step,
            score,
            contributions,
        });
    }

    Ok(ScoreTimeline { step, points })
}
