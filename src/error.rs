//! Error types for stress-detect

use thiserror::Error;

/// Errors that can occur around classification.
///
/// Classification itself never fails; these cover parsing, validation and
/// encoding at the edges of the crate.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("Reading field {field} is not a finite number")]
    NonFiniteReading { field: &'static str },

    #[error("Unknown stress level: {0}")]
    UnknownLevel(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

/// Errors raised while turning user-entered text into a reading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// One or more fields were empty or not a number. The failing field is
    /// not identified.
    #[error("Please fill in all fields with valid numbers")]
    InvalidInput,
}
