//! Shared data models for the Clipsmith highlight engine.
//!
//! This crate provides Serde-serializable value types for:
//! - Timestamped transcript words
//! - Raw and normalized signal samples
//! - The fused score timeline
//! - Candidate windows and selected clips
//! - Subtitle cues and display lines
//! - Engine configuration
//!
//! All types are immutable value objects: they are created fresh per pipeline
//! run and never mutated in place after creation.

pub mod candidate;
pub mod clip;
pub mod config;
pub mod cue;
pub mod signal;
pub mod timeline;
pub mod word;

// Re-export common types
pub use candidate::Candidate;
pub use clip::SelectedClip;
pub use config::EngineConfig;
pub use cue::{CueLine, SubtitleCue};
pub use signal::{Chapter, NormalizedSignal, SignalKind, SignalSample};
pub use timeline::{ScorePoint, ScoreTimeline};
pub use word::TimedWord;
