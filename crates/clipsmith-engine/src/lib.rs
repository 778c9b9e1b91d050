//! Highlight detection and clip selection engine.
//!
//! Turns per-video measurements from external collaborators (transcript
//! words, loudness samples, scene cuts, chapter markers) into a small set of
//! short, non-overlapping highlight clips with word-level subtitle cues.
//!
//! The flow is strictly left to right:
//!
//! ```text
//! raw measurements -> normalized signals -> fused timeline
//!                  -> candidate windows -> selection -> subtitle cues
//! ```
//!
//! Every stage is a pure function of its inputs plus configuration; the whole
//! pipeline is deterministic and does no I/O. See [`detect_highlights`] for
//! the single entry point.

pub mod cues;
pub mod error;
pub mod fuse;
pub mod normalize;
pub mod pipeline;
pub mod refine;
pub mod select;
pub mod signals;
pub mod windows;

// Re-export common types
pub use cues::{build_cues, group_into_lines};
pub use error::{EngineError, EngineResult};
pub use pipeline::{detect_highlights, EngineInput};
