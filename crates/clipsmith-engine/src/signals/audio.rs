//! Audio-energy extractor.

use clipsmith_models::SignalSample;

/// Pass loudness measurements through as the raw audio-energy signal.
///
/// The audio-analysis collaborator already delivers RMS loudness at fixed
/// intervals; smoothing and windowing are normalization concerns, so the raw
/// curve goes through unchanged.
pub fn audio_energy(loudness: &[SignalSample]) -> Vec<SignalSample> {
    loudness.to_vec()
}
