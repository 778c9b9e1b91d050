//! Signal extractors.
//!
//! Each extractor is a pure function from externally supplied raw
//! measurements to an ordered sequence of [`SignalSample`]s. Extractors never
//! fabricate data: a source with nothing to say produces an empty sequence,
//! which downstream fusion treats as an absent signal (absence is not a low
//! score).
//!
//! The four extractors are mutually independent and may be run in any order.

mod audio;
mod chapter;
mod keyword;
mod scene;

pub use audio::audio_energy;
pub use chapter::chapter_markers;
pub use keyword::keyword_density;
pub use scene::scene_changes;
