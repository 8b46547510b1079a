//! Validation errors for the pure core.
//!
//! All failures are local and recoverable: the caller corrects the input and
//! re-invokes. Nothing here is fatal.

use std::fmt;

/// Error returned when an input fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Monetary amount was negative, NaN, or infinite.
    Amount,
    /// Distance was negative, NaN, or infinite.
    Distance,
    /// Travel speed was non-positive or non-finite.
    Speed,
    /// Scroll geometry reading was negative, NaN, or infinite.
    Geometry,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::Amount => {
                write!(f, "monetary amount must be a finite, non-negative number")
            }
            InvalidInput::Distance => {
                write!(f, "distance must be a finite, non-negative number")
            }
            InvalidInput::Speed => write!(f, "speed must be a finite, positive number"),
            InvalidInput::Geometry => {
                write!(f, "scroll geometry must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
