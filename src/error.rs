//! Error types for srs-core.

use thiserror::Error;

/// Result type alias using CardError.
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors from validating externally supplied scheduler input.
///
/// The scheduler itself is total over valid input; these only arise at the
/// boundary, when constructing a rating from a raw integer or loading a card
/// from storage that may have been corrupted.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("invalid rating value {value}, expected 1-4")]
    InvalidRating { value: u8 },

    #[error("difficulty {value} outside [0.1, 1.0]")]
    DifficultyOutOfRange { value: f64 },

    #[error("stability {value} is not a non-negative finite number")]
    InvalidStability { value: f64 },
}
