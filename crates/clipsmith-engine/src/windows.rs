//! Candidate window generation.
//!
//! Slides over the fused score timeline looking for local peaks, then grows a
//! duration-constrained window around each peak. Candidates may overlap each
//! other; the selector resolves that later. All tie-breaks favor earlier
//! timestamps so repeated runs produce identical candidates.

use std::collections::HashSet;

use tracing::debug;

use clipsmith_models::{Candidate, EngineConfig, ScoreTimeline, SignalKind};

/// Generate duration-constrained candidate windows around score peaks.
///
/// For every local peak clearing `peak_threshold`, every window length in
/// `[min_duration, max_duration]` and every placement containing the peak is
/// evaluated directly; the window with the highest mean score wins, with ties
/// resolved toward shorter, earlier windows. Windows never extend past the
/// video end. An empty result is a normal outcome.
pub fn generate_candidates(timeline: &ScoreTimeline, config: &EngineConfig) -> Vec<Candidate> {
    let scores = timeline.scores();
    let n = scores.len();
    if n == 0 {
        return Vec::new();
    }

    let step = timeline.step;
    let min_len = ((config.min_duration / step).round() as usize).max(1);
    let max_len = (config.max_duration / step).round() as usize;
    // Last index whose time a window may end at without leaving the video.
    let last = n - 1;
    if min_len > last {
        // Video shorter than the minimum clip duration.
        return Vec::new();
    }
    let max_len = max_len.min(last);

    let mut prefix = vec![0.0f64; n + 1];
    for (i, score) in scores.iter().enumerate() {
        prefix[i + 1] = prefix[i] + score;
    }

    let peaks = find_peaks(&scores, config.peak_threshold);
    debug!(peaks = peaks.len(), "detected score peaks");

    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut candidates = Vec::new();

    for peak in peaks {
        let Some((start, len)) = best_window(&prefix, peak, min_len, max_len, last) else {
            continue;
        };
        if !seen.insert((start, len)) {
            continue;
        }

        let mean = (prefix[start + len] - prefix[start]) / len as f64;
        let dominant = dominant_signal(timeline, start, len);
        candidates.push(Candidate {
            start: start as f64 * step,
            end: (start + len) as f64 * step,
            score: mean,
            dominant_signal: dominant,
        });
    }

    debug!(candidates = candidates.len(), "generated candidate windows");
    candidates
}

/// Local peak detection with earlier-timestamp tie-breaks.
///
/// An index is a peak when its score clears the threshold, strictly exceeds
/// its left neighbor, and is at least its right neighbor. On a plateau only
/// the first index qualifies.
fn find_peaks(scores: &[f64], threshold: f64) -> Vec<usize> {
    let n = scores.len();
    (0..n)
        .filter(|&i| {
            scores[i] > threshold
                && (i == 0 || scores[i] > scores[i - 1])
                && (i + 1 == n || scores[i] >= scores[i + 1])
        })
        .collect()
}

/// Bounded search for the best window containing a peak.
///
/// Windows span grid indices `[start, start + len)`, covering the time range
/// `[start * step, (start + len) * step]`; containment is by time, so a peak
/// sitting exactly on the window's end boundary still counts. Returns
/// `(start, len)` of the window with the highest mean score, or `None` when
/// no valid placement exists (peak too close to the video end).
fn best_window(
    prefix: &[f64],
    peak: usize,
    min_len: usize,
    max_len: usize,
    last: usize,
) -> Option<(usize, usize)> {
    let mut best: Option<(f64, usize, usize)> = None;

    for len in min_len..=max_len {
        if len > last {
            break;
        }
        let lo = peak.saturating_sub(len);
        let hi = peak.min(last - len);
        for start in lo..=hi {
            let mean = (prefix[start + len] - prefix[start]) / len as f64;
            if best.map_or(true, |(best_mean, _, _)| mean > best_mean) {
                best = Some((mean, start, len));
            }
        }
    }

    best.map(|(_, start, len)| (start, len))
}

/// The signal with the largest summed contribution over the window.
///
/// Ties resolve to the canonical [`SignalKind`] order. Labeling only; never
/// consulted for ranking.
fn dominant_signal(timeline: &ScoreTimeline, start: usize, len: usize) -> SignalKind {
    let mut totals: Vec<(SignalKind, f64)> = Vec::new();
    for point in &timeline.points[start..start + len] {
        for (&kind, &contribution) in &point.contributions {
            match totals.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, total)) => *total += contribution,
                None => totals.push((kind, contribution)),
            }
        }
    }
    totals.sort_by(|a, b| a.0.cmp(&b.0));

    let mut best = SignalKind::AudioEnergy;
    let mut best_total = f64::NEG_INFINITY;
    for (kind, total) in totals {
        if total > best_total {
            best = kind;
            best_total = total;
        }
    }
    best
}
