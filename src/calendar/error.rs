//! Availability loading errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when loading an availability list
#[derive(Debug, Error)]
pub enum AvailabilityError {
    /// The input is not a JSON array of entries
    #[error("Availability could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A price is negative or not a finite number
    #[error("Invalid price {price} for {date}")]
    InvalidPrice { date: NaiveDate, price: f64 },
}
