//! Calendar data supplied by the caller.
//!
//! `DateRange` is the unit of selection and `AvailabilityIndex` is the
//! read-only lookup of price and bookability the picker consults.

mod availability;
pub mod error;
mod range;

pub use availability::{AvailabilityEntry, AvailabilityIndex};
pub use error::AvailabilityError;
pub use range::{days_between, DateRange};
