//! Greedy non-overlapping clip selection.
//!
//! "Most exciting first" is the user-facing semantic: candidates are taken in
//! score order and kept whenever they fit, rather than solving weighted
//! interval scheduling for the optimal score sum. An explicit sort-and-scan
//! keeps the tie-break behavior easy to reason about.

use tracing::debug;

use clipsmith_models::{Candidate, SelectedClip};

/// Select up to `clip_count` non-overlapping candidates, highest score first.
///
/// Candidates tied on score are considered earlier-start first. If fewer
/// non-overlapping candidates exist than requested, the result is simply
/// shorter; nothing is padded or fabricated. Ranks are assigned 1..N in
/// acceptance (score) order, then the list is re-sorted by start time so the
/// output follows video chronology.
pub fn select_top(mut candidates: Vec<Candidate>, clip_count: u32) -> Vec<SelectedClip> {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.start.total_cmp(&b.start))
    });

    let mut accepted: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        if accepted.len() >= clip_count as usize {
            break;
        }
        if accepted.iter().all(|kept| !kept.overlaps(&candidate)) {
            accepted.push(candidate);
        }
    }

    debug!(clips = accepted.len(), requested = clip_count, "greedy selection done");

    let mut clips: Vec<SelectedClip> = accepted
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| SelectedClip::from_candidate(i as u32 + 1, candidate))
        .collect();
    clips.sort_by(|a, b| a.start.total_cmp(&b.start));
    clips
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipsmith_models::SignalKind;

    fn cand(start: f64, end: f64, score: f64) -> Candidate {
        Candidate {
            start,
            end,
            score,
            dominant_signal: SignalKind::AudioEnergy,
        }
    }

    #[test]
    fn test_greedy_prefers_score_over_sum() {
        // The 0.85 candidate overlaps the 0.9 one; greedy takes 0.9 first,
        // rejects 0.85, then accepts the disjoint 0.8.
        let candidates = vec![
            cand(0.0, 20.0, 0.9),
            cand(10.0, 30.0, 0.85),
            cand(40.0, 60.0, 0.8),
        ];
        let clips = select_top(candidates, 2);

        assert_eq!(clips.len(), 2);
        let scores: Vec<f64> = clips.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![0.9, 0.8]);
    }

    #[test]
    fn test_output_sorted_by_start_with_score_order_ranks() {
        let candidates = vec![
            cand(50.0, 70.0, 0.9),
            cand(0.0, 20.0, 0.6),
            cand(100.0, 120.0, 0.8),
        ];
        let clips = select_top(candidates, 3);

        let starts: Vec<f64> = clips.iter().map(|c| c.start).collect();
        assert_eq!(starts, vec![0.0, 50.0, 100.0]);

        let ranks: Vec<u32> = clips.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![3, 1, 2]);
    }

    #[test]
    fn test_fewer_candidates_than_requested() {
        let clips = select_top(vec![cand(0.0, 20.0, 0.5)], 5);
        assert_eq!(clips.len(), 1);
    }

    #[test]
    fn test_no_candidates_yields_empty_list() {
        assert!(select_top(Vec::new(), 3).is_empty());
    }

    #[test]
    fn test_equal_scores_prefer_earlier_start() {
        let candidates = vec![cand(40.0, 60.0, 0.7), cand(0.0, 20.0, 0.7)];
        let clips = select_top(candidates, 1);
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].start, 0.0);
    }

    #[test]
    fn test_selected_clips_never_overlap() {
        let candidates = vec![
            cand(0.0, 30.0, 0.9),
            cand(15.0, 45.0, 0.8),
            cand(29.0, 59.0, 0.7),
            cand(60.0, 90.0, 0.6),
        ];
        let clips = select_top(candidates, 4);
        for (i, a) in clips.iter().enumerate() {
            for b in &clips[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }
}
