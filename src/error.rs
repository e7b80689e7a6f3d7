//! Error types for word selection and name composition.

use thiserror::Error;

/// Result type for whimsy operations.
pub type Result<T, E = WhimsyError> = std::result::Result<T, E>;

/// Errors returned by the selector and the composer.
#[derive(Debug, Error)]
pub enum WhimsyError {
    /// Requested part count falls outside `1..=max`.
    #[error("count must be between 1 and {max}, got {requested}")]
    InvalidCount { requested: i64, max: usize },

    /// Selection was attempted over an empty sequence.
    #[error("cannot pick from an empty sequence")]
    EmptyInput,

    /// The catalog has no words to compose from.
    #[error("no words available")]
    EmptyCatalog,

    /// The secure random source failed to produce a value.
    #[error("failed to generate random number: {0}")]
    RandomSource(String),
}
