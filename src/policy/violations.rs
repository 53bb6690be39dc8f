//! Reasons a provisional range cannot be confirmed.

use thiserror::Error;

/// A single rule a provisional range breaks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StayViolation {
    #[error("No check-in date selected")]
    MissingCheckIn,

    #[error("No check-out date selected")]
    MissingCheckOut,

    #[error("Stay of {nights} night(s) is shorter than the minimum of {min}")]
    TooShort { min: u32, nights: i64 },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
