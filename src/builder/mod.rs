//! Builder API for pickers and search forms.
//!
//! Builders validate their input once, at `build()`, so the constructed
//! components never have to re-check it.

pub mod error;
pub mod picker;
pub mod search;

pub use crate::policy::StayPolicyBuilder;
pub use error::BuildError;
pub use picker::DateRangePickerBuilder;
pub use search::BookingSearchBuilder;
