//! Build errors for pickers and search forms.

use thiserror::Error;

/// Errors that can occur when building pickers, policies and search forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Minimum nights must be at least 1, got {0}")]
    InvalidMinNights(u32),

    #[error("Maximum adults must be at least 1, got {0}")]
    InvalidMaxAdults(u32),

    #[error("Default {field} ({value}) is outside the allowed range {min}..={max}")]
    DefaultOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Default location '{0}' is not in the location list")]
    UnknownDefaultLocation(String),

    #[error("No search callback specified. Call .on_search(callback) before .build()")]
    MissingSearchCallback,
}
