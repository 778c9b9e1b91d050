//! Subtitle cue building.
//!
//! Slices the global transcript to a clip's time range and rebases word
//! timestamps to clip-relative time for the external subtitle renderer.

use clipsmith_models::{CueLine, SubtitleCue, TimedWord};

/// Build the ordered cue sequence for one clip span.
///
/// A word belongs to the clip containing its midpoint; the interval is
/// half-open (`start <= midpoint < end`) so a word straddling the shared
/// boundary of two adjacent clips lands in exactly one of them. Timestamps
/// are rebased by subtracting the clip start; the word's own boundaries are
/// preserved, so a boundary word may begin slightly before zero.
pub fn build_cues(words: &[TimedWord], clip_start: f64, clip_end: f64) -> Vec<SubtitleCue> {
    words
        .iter()
        .filter(|word| {
            let midpoint = word.midpoint();
            midpoint >= clip_start && midpoint < clip_end
        })
        .map(|word| {
            SubtitleCue::new(
                word.text.clone(),
                word.start - clip_start,
                word.end - clip_start,
            )
        })
        .collect()
}

/// Group a clip's cues into display lines of `words_per_line` words.
///
/// Renderers draw the full line and highlight one word at a time, so each
/// line carries both the joined text and the per-word cues.
pub fn group_into_lines(cues: &[SubtitleCue], words_per_line: usize) -> Vec<CueLine> {
    cues.chunks(words_per_line.max(1))
        .filter_map(|chunk| {
            let first = chunk.first()?;
            let last = chunk.last()?;
            Some(CueLine {
                text: chunk
                    .iter()
                    .map(|c| c.word.trim())
                    .collect::<Vec<_>>()
                    .join(" "),
                start: first.start,
                end: last.end,
                words: chunk.to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> TimedWord {
        TimedWord::new(text, start, end, 0.9)
    }

    #[test]
    fn test_words_rebased_to_clip_time() {
        let words = vec![word("hello", 30.5, 31.0), word("world", 31.2, 31.9)];
        let cues = build_cues(&words, 30.0, 50.0);
        assert_eq!(cues.len(), 2);
        assert!((cues[0].start - 0.5).abs() < 1e-9);
        assert!((cues[0].end - 1.0).abs() < 1e-9);
        assert_eq!(cues[0].word, "hello");
    }

    #[test]
    fn test_words_outside_clip_excluded() {
        let words = vec![
            word("before", 5.0, 6.0),
            word("inside", 35.0, 36.0),
            word("after", 55.0, 56.0),
        ];
        let cues = build_cues(&words, 30.0, 50.0);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].word, "inside");
    }

    #[test]
    fn test_boundary_word_assigned_to_exactly_one_clip() {
        // Midpoint sits exactly on the boundary between two adjacent clips.
        let words = vec![word("straddle", 24.5, 25.5)];
        let first = build_cues(&words, 10.0, 25.0);
        let second = build_cues(&words, 25.0, 40.0);
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
        // Boundary words keep their real span, rebased.
        assert!((second[0].start - (-0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_partial_overlap_uses_midpoint() {
        // Word hangs over the clip end but its midpoint is inside.
        let words = vec![word("edge", 49.5, 50.3)];
        let cues = build_cues(&words, 30.0, 50.0);
        assert_eq!(cues.len(), 1);
    }

    #[test]
    fn test_lines_grouped_by_word_count() {
        let cues: Vec<SubtitleCue> = (0..10)
            .map(|i| SubtitleCue::new(format!("w{i}"), i as f64, i as f64 + 0.8))
            .collect();
        let lines = group_into_lines(&cues, 4);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].words.len(), 4);
        assert_eq!(lines[2].words.len(), 2);
        assert_eq!(lines[0].text, "w0 w1 w2 w3");
        assert!((lines[1].start - 4.0).abs() < 1e-9);
        assert!((lines[1].end - 7.8).abs() < 1e-9);
    }

    #[test]
    fn test_no_cues_no_lines() {
        assert!(group_into_lines(&[], 4).is_empty());
    }
}
