//! Chapter-marker extractor.

use clipsmith_models::{Chapter, SignalSample};

/// Produce an impulse sample at each publisher-supplied chapter boundary.
///
/// Chapters are optional metadata; when the video has none this yields an
/// empty sequence and fusion renormalizes the remaining weights instead of
/// scoring the whole video as chapter-less.
pub fn chapter_markers(chapters: Option<&[Chapter]>) -> Vec<SignalSample> {
    chapters
        .map(|chapters| {
            chapters
                .iter()
                .map(|c| SignalSample::new(c.start, 1.0))
                .collect()
        })
        .unwrap_or_default()
}
