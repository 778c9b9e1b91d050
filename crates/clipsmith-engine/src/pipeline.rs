//! End-to-end highlight detection.
//!
//! The pipeline is a pure function over in-memory data: raw measurements flow
//! through extraction, normalization, fusion, candidate generation,
//! selection, boundary refinement, and cue building, strictly in that order.
//! No I/O, no retries, no shared mutable state; identical inputs always yield
//! identical output.

use std::collections::BTreeMap;

use tracing::{debug, info};

use clipsmith_models::{
    Chapter, EngineConfig, SelectedClip, SignalKind, SignalSample, TimedWord,
};

use crate::cues::build_cues;
use crate::error::{EngineError, EngineResult};
use crate::fuse::fuse;
use crate::normalize::normalize;
use crate::refine::refine_boundaries;
use crate::select::select_top;
use crate::signals::{audio_energy, chapter_markers, keyword_density, scene_changes};
use crate::windows::generate_candidates;

/// Everything the engine consumes from its collaborators for one video.
#[derive(Debug, Clone, Default)]
pub struct EngineInput {
    /// Timestamped transcript words, ordered by start time
    pub words: Vec<TimedWord>,

    /// Loudness measurements at fixed intervals, ordered by timestamp
    pub loudness: Vec<SignalSample>,

    /// Detected scene-cut timestamps, ascending
    pub scene_cuts: Vec<f64>,

    /// Publisher-supplied chapters, if the video has any
    pub chapters: Option<Vec<Chapter>>,

    /// Total video duration in seconds
    pub video_duration: f64,
}

/// Detect highlight clips for one video.
///
/// Returns up to `config.clip_count` non-overlapping clips sorted by start
/// time, each carrying its subtitle cues. An empty list means no window
/// cleared the score threshold; that is a normal outcome, not an error.
///
/// # Errors
/// - [`EngineError::InvalidConfiguration`] when the configuration fails
///   validation or the video duration is not positive.
/// - [`EngineError::InsufficientSignal`] when every input signal is empty.
pub fn detect_highlights(
    input: &EngineInput,
    config: &EngineConfig,
) -> EngineResult<Vec<SelectedClip>> {
    config
        .validate()
        .map_err(EngineError::invalid_configuration)?;

    if input.video_duration <= 0.0 {
        return Err(EngineError::invalid_configuration(
            "video_duration must be positive",
        ));
    }

    let raw = extract_signals(input, config);
    if raw.is_empty() {
        return Err(EngineError::InsufficientSignal);
    }
    debug!(signals = raw.len(), "extracted raw signals");

    let normalized: BTreeMap<SignalKind, _> = raw
        .iter()
        .map(|(&kind, samples)| {
            (
                kind,
                normalize(
                    kind,
                    samples,
                    input.video_duration,
                    config.sample_step,
                    config.decay_window,
                ),
            )
        })
        .collect();

    let timeline = fuse(
        &normalized,
        &config.signal_weights,
        input.video_duration,
        config.sample_step,
    )?;

    let candidates = generate_candidates(&timeline, config);
    if candidates.is_empty() {
        info!("no highlights detected");
        return Ok(Vec::new());
    }

    let clips = select_top(candidates, config.clip_count);
    let clips = refine_boundaries(clips, &input.words, input.video_duration, config);
    let clips: Vec<SelectedClip> = clips
        .into_iter()
        .map(|clip| {
            let cues = build_cues(&input.words, clip.start, clip.end);
            clip.with_cues(cues)
        })
        .collect();

    info!(clips = clips.len(), "selected highlight clips");
    Ok(clips)
}

/// Run the four extractors, keeping only signals that produced data.
///
/// The extractors are mutually independent pure functions over disjoint
/// inputs; callers orchestrating many videos may run them concurrently, but
/// sequential execution here keeps the engine itself single-threaded.
fn extract_signals(
    input: &EngineInput,
    config: &EngineConfig,
) -> BTreeMap<SignalKind, Vec<SignalSample>> {
    let extracted = [
        (SignalKind::AudioEnergy, audio_energy(&input.loudness)),
        (
            SignalKind::KeywordDensity,
            keyword_density(&input.words, &config.keywords, config.keyword_window),
        ),
        (SignalKind::SceneChange, scene_changes(&input.scene_cuts)),
        (
            SignalKind::ChapterMarker,
            chapter_markers(input.chapters.as_deref()),
        ),
    ];

    extracted
        .into_iter()
        .filter(|(_, samples)| !samples.is_empty())
        .collect()
}
