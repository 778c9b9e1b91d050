//! Scene-change extractor.

use clipsmith_models::SignalSample;

/// Produce an impulse sample at each detected cut timestamp.
///
/// Cut timestamps come from the external shot-boundary detector. All other
/// times are implicitly zero until normalization spreads each impulse over
/// its decay window.
pub fn scene_changes(cuts: &[f64]) -> Vec<SignalSample> {
    cuts.iter().map(|&t| SignalSample::new(t, 1.0)).collect()
}
