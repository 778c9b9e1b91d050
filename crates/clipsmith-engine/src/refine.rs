//! Clip boundary refinement.
//!
//! Selected windows come off the score grid, which rarely lines up with
//! speech. Snapping each boundary to the nearest word edge avoids clips that
//! open or close mid-word. Non-overlap and duration bounds are hard
//! invariants: a snap that would break them is discarded and the original
//! window kept.

use tracing::debug;

use clipsmith_models::{EngineConfig, SelectedClip, TimedWord};

/// Snap clip boundaries to nearby word boundaries.
///
/// Start snaps to the nearest word start within `snap_tolerance` seconds,
/// end to the nearest word end. Duration bounds are re-enforced by extending
/// or truncating the end, with the end clamped to the video duration. A
/// snapped window is only accepted when it still clears the previously
/// emitted clip, stops short of the next original window, and kept its
/// minimum duration through the clamp; otherwise the clip passes through
/// unrefined. With no transcript this is a no-op.
pub fn refine_boundaries(
    clips: Vec<SelectedClip>,
    words: &[TimedWord],
    video_duration: f64,
    config: &EngineConfig,
) -> Vec<SelectedClip> {
    if words.is_empty() {
        return clips;
    }

    let mut out: Vec<SelectedClip> = Vec::with_capacity(clips.len());
    let mut prev_end = f64::NEG_INFINITY;

    for (i, clip) in clips.iter().enumerate() {
        let next_start = clips
            .get(i + 1)
            .map(|c| c.start)
            .unwrap_or(f64::INFINITY);

        let snapped = snap(clip, words, video_duration, config);
        let fits = snapped.start >= prev_end
            && snapped.end <= next_start
            && snapped.duration() >= config.min_duration;
        let chosen = if fits {
            snapped
        } else {
            debug!(
                clip = clip.rank,
                "snapped boundaries would collide with a neighbor or the video end, keeping original window"
            );
            clip.clone()
        };

        prev_end = chosen.end;
        out.push(chosen);
    }

    out
}

fn snap(
    clip: &SelectedClip,
    words: &[TimedWord],
    video_duration: f64,
    config: &EngineConfig,
) -> SelectedClip {
    let tolerance = config.snap_tolerance;
    let mut start = clip.start;
    let mut end = clip.end;

    let mut best_start_diff = f64::INFINITY;
    for word in words {
        let diff = (word.start - clip.start).abs();
        if diff < best_start_diff && diff <= tolerance {
            best_start_diff = diff;
            start = word.start;
        }
    }

    let mut best_end_diff = f64::INFINITY;
    for word in words {
        let diff = (word.end - clip.end).abs();
        if diff < best_end_diff && diff <= tolerance {
            best_end_diff = diff;
            end = word.end;
        }
    }

    // Snapping must not push the clip outside its duration bounds, and
    // re-extending the end must never run past the video itself. A clip left
    // under minimum duration by the clamp is rejected by the caller.
    let duration = end - start;
    if duration < config.min_duration {
        end = start + config.min_duration;
    } else if duration > config.max_duration {
        end = start + config.max_duration;
    }
    end = end.min(video_duration);

    SelectedClip {
        start,
        end,
        ..clip.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipsmith_models::{Candidate, SignalKind};

    fn clip(rank: u32, start: f64, end: f64) -> SelectedClip {
        SelectedClip::from_candidate(
            rank,
            Candidate {
                start,
                end,
                score: 0.5,
                dominant_signal: SignalKind::AudioEnergy,
            },
        )
    }

    fn word(start: f64, end: f64) -> TimedWord {
        TimedWord::new("word", start, end, 0.9)
    }

    fn config() -> EngineConfig {
        EngineConfig {
            min_duration: 15.0,
            max_duration: 30.0,
            snap_tolerance: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_words_is_noop() {
        let clips = vec![clip(1, 10.0, 30.0)];
        let refined = refine_boundaries(clips.clone(), &[], 120.0, &config());
        assert_eq!(refined, clips);
    }

    #[test]
    fn test_snaps_to_nearby_word_boundaries() {
        let words = vec![word(9.2, 9.8), word(10.6, 11.1), word(29.3, 29.9)];
        let refined = refine_boundaries(vec![clip(1, 10.0, 30.0)], &words, 120.0, &config());
        assert_eq!(refined.len(), 1);
        // Nearest word start to 10.0 is 10.6 (0.6 away beats 9.2's 0.8).
        assert!((refined[0].start - 10.6).abs() < 1e-9);
        assert!((refined[0].end - 29.9).abs() < 1e-9);
    }

    #[test]
    fn test_ignores_words_outside_tolerance() {
        let words = vec![word(0.0, 1.0), word(50.0, 51.0)];
        let refined = refine_boundaries(vec![clip(1, 10.0, 30.0)], &words, 120.0, &config());
        assert_eq!(refined[0].start, 10.0);
        assert_eq!(refined[0].end, 30.0);
    }

    #[test]
    fn test_duration_bounds_re_enforced() {
        // Snapping start later and end earlier would shrink below min.
        let words = vec![word(11.8, 12.2), word(26.5, 26.8)];
        let refined = refine_boundaries(vec![clip(1, 10.0, 26.0)], &words, 120.0, &config());
        let duration = refined[0].end - refined[0].start;
        assert!(duration >= 15.0 - 1e-9);
    }

    #[test]
    fn test_snap_never_creates_overlap() {
        // Second clip's start would snap backwards into the first clip's
        // span; the refinement must keep the pair disjoint.
        let words = vec![word(28.5, 29.0), word(44.8, 45.3)];
        let clips = vec![clip(1, 10.0, 30.0), clip(2, 30.0, 45.0)];
        let refined = refine_boundaries(clips, &words, 120.0, &config());
        assert!(refined[0].end <= refined[1].start + 1e-9);
    }

    #[test]
    fn test_clip_at_video_end_never_extends_past_it() {
        // Snapping shrinks the clip below minimum duration; re-extending the
        // end would run past the 60s video, so the original window is kept.
        let words = vec![word(46.5, 47.0), word(58.0, 58.6)];
        let clips = vec![clip(1, 45.0, 60.0)];
        let refined = refine_boundaries(clips, &words, 60.0, &config());
        assert_eq!(refined.len(), 1);
        assert!(
            refined[0].end <= 60.0,
            "clip [{}, {}] extends past the video",
            refined[0].start,
            refined[0].end
        );
        assert!(refined[0].duration() >= 15.0 - 1e-9);
    }
}
