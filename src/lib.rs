//! Booking search: a pure core for hotel and travel search bars
//!
//! The crate models the interactive parts of a booking search bar without
//! any UI toolkit: a date-range picker with per-day prices and a minimum
//! stay, a guest stepper and a destination lookup, composed into a search
//! that emits one structured payload.
//!
//! Selection logic is a set of pure functions; the picker, guest selector
//! and search form are thin imperative shells that own their state and fire
//! callbacks. Everything is synchronous.
//!
//! # Core Concepts
//!
//! - **Committed vs. provisional**: clicks only change a session-local
//!   provisional range; the committed range changes on confirm.
//! - **Policy**: a `StayPolicy` decides whether a range can be confirmed and
//!   reports every broken rule at once.
//! - **Availability**: a date-keyed index of prices and bookability supplied
//!   by the caller.
//!
//! # Example
//!
//! ```rust
//! use booking_search::builder::DateRangePickerBuilder;
//! use booking_search::calendar::{AvailabilityEntry, AvailabilityIndex, DateRange};
//! use booking_search::core::SelectionState;
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
//! let availability: AvailabilityIndex = (1..=31)
//!     .map(|d| AvailabilityEntry::available(day(d), 100.0))
//!     .collect();
//!
//! let mut picker = DateRangePickerBuilder::new()
//!     .availability(availability)
//!     .min_nights(3)
//!     .on_confirm(|range| println!("booked {range:?}"))
//!     .build()
//!     .unwrap();
//!
//! picker.open();
//! picker.click(day(10));
//! assert_eq!(picker.state(), SelectionState::PartialStart);
//! assert_eq!(picker.session_label().unwrap(), "Select check-out (min. 3 nights)");
//!
//! picker.click(day(12)); // inside the minimum stay, ignored
//! picker.click(day(13));
//! assert_eq!(picker.session_label().unwrap(), "3 nights");
//!
//! let confirmed = picker.confirm().unwrap();
//! assert_eq!(confirmed, DateRange::new(day(10), day(13)));
//! ```

pub mod builder;
pub mod calendar;
pub mod config;
pub mod core;
pub mod guests;
pub mod location;
pub mod picker;
pub mod policy;
pub mod search;
pub mod translations;

// Re-export commonly used types
pub use builder::{BookingSearchBuilder, BuildError, DateRangePickerBuilder};
pub use calendar::{AvailabilityEntry, AvailabilityIndex, DateRange};
pub use core::{Guard, SelectionState};
pub use picker::{ClickOutcome, ConfirmError, DateRangePicker};
pub use search::{BookingSearch, BookingSearchPayload};
