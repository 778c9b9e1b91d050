//! Signal normalization and sparse-to-dense resampling.
//!
//! Heterogeneous raw signals (RMS loudness, keyword hit counts, cut impulses)
//! are rescaled to a common `[0, 1]` range per video, then resampled onto the
//! fixed-step timeline grid. Impulses spread forward in time with linear
//! decay to zero over the configured window, modelling excitement that
//! lingers briefly after a loud moment or a cut.

use clipsmith_models::{NormalizedSignal, SignalKind, SignalSample};

/// Normalize a raw signal and resample it onto the timeline grid.
///
/// Returns an empty signal when the input is empty; fusion treats that as an
/// absent channel.
pub fn normalize(
    kind: SignalKind,
    raw: &[SignalSample],
    video_duration: f64,
    step: f64,
    decay_window: f64,
) -> NormalizedSignal {
    if raw.is_empty() {
        return NormalizedSignal {
            kind,
            samples: Vec::new(),
        };
    }

    let rescaled = min_max(raw);
    let samples = resample_with_decay(&rescaled, video_duration, step, decay_window);
    NormalizedSignal { kind, samples }
}

/// Min-max rescale values to `[0, 1]` over the signal's own observed range.
///
/// A constant signal (min == max) maps to a flat 0.5 so it neither dominates
/// nor vanishes in fusion.
fn min_max(raw: &[SignalSample]) -> Vec<SignalSample> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in raw {
        min = min.min(sample.value);
        max = max.max(sample.value);
    }

    let range = max - min;
    raw.iter()
        .map(|s| {
            let value = if range.abs() < f64::EPSILON {
                0.5
            } else {
                (s.value - min) / range
            };
            SignalSample::new(s.timestamp, value)
        })
        .collect()
}

/// Resample onto the fixed-step grid covering `[0, video_duration]`.
///
/// Each sample influences grid points at and after its timestamp: full value
/// at the sample time, decaying linearly to zero over `decay_window`. Where
/// several samples reach the same grid point the strongest influence wins.
/// A zero decay window degenerates to nearest-neighbor assignment.
fn resample_with_decay(
    samples: &[SignalSample],
    video_duration: f64,
    step: f64,
    decay_window: f64,
) -> Vec<SignalSample> {
    let n = grid_len(video_duration, step);
    let mut values = vec![0.0f64; n];

    for sample in samples {
        if decay_window <= f64::EPSILON {
            let idx = (sample.timestamp / step).round();
            if idx >= 0.0 && (idx as usize) < n {
                let idx = idx as usize;
                values[idx] = values[idx].max(sample.value);
            }
            continue;
        }

        let first = (sample.timestamp / step).ceil().max(0.0) as usize;
        for idx in first..n {
            let dt = idx as f64 * step - sample.timestamp;
            if dt >= decay_window {
                break;
            }
            let influence = sample.value * (1.0 - dt / decay_window);
            values[idx] = values[idx].max(influence);
        }
    }

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| SignalSample::new(i as f64 * step, value))
        .collect()
}

/// Number of grid points covering `[0, video_duration]` at the given step.
pub fn grid_len(video_duration: f64, step: f64) -> usize {
    if video_duration <= 0.0 || step <= 0.0 {
        return 0;
    }
    (video_duration / step).floor() as usize + 1
}
