//! Validation-based stay rules.
//!
//! A provisional range is checked against a `StayPolicy` before it may be
//! confirmed. Checks use Stillwater's `Validation` so every broken rule is
//! reported together rather than stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use booking_search::calendar::DateRange;
//! use booking_search::policy::{violations_of, StayPolicyBuilder, StayViolation};
//! use chrono::NaiveDate;
//!
//! let policy = StayPolicyBuilder::new().min_nights(3).build().unwrap();
//!
//! let from = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! let to = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
//!
//! let violations = violations_of(policy.validate(&DateRange::new(from, to)));
//! assert_eq!(violations, vec![StayViolation::TooShort { min: 3, nights: 2 }]);
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::StayPolicyBuilder;
pub use rules::{violations_of, RangeCheck, StayPolicy, StayValidation};
pub use violations::StayViolation;
