//! Error types for the highlight engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during highlight detection.
///
/// An empty candidate or clip list is a normal `Ok` outcome, never an error;
/// callers render it as "no highlights detected".
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rejected configuration: all-zero weights, inverted duration bounds,
    /// out-of-range clip count, and similar. Raised before any processing.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Every input signal was empty; there is not enough audio, text, or
    /// visual data to analyze this video. Distinct from "video too short".
    #[error("Not enough signal data to analyze this video")]
    InsufficientSignal,
}

impl EngineError {
    /// Create an invalid-configuration error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
