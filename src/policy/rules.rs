//! Stay rules evaluated with `Validation`.

use crate::calendar::{days_between, DateRange};
use crate::policy::violations::StayViolation;
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a range against a policy.
pub type StayValidation = Validation<(), NonEmptyVec<StayViolation>>;

/// Type alias for caller-supplied range checks
pub type RangeCheck = Arc<dyn Fn(&DateRange) -> StayValidation + Send + Sync>;

/// Rules a range must satisfy before it can be confirmed.
///
/// The minimum stay is always at least one night, so a confirmed range can
/// never have zero nights.
#[derive(Clone)]
pub struct StayPolicy {
    pub(crate) min_nights: u32,
    pub(crate) required_checks: Vec<RangeCheck>,
}

impl StayPolicy {
    /// Policy with only a minimum-nights rule. Values below 1 are raised to 1.
    pub fn with_min_nights(min_nights: u32) -> Self {
        Self {
            min_nights: min_nights.max(1),
            required_checks: Vec::new(),
        }
    }

    pub fn min_nights(&self) -> u32 {
        self.min_nights
    }

    /// Whether checking out on `to` after checking in on `from` is long enough.
    pub fn allows_checkout(&self, from: NaiveDate, to: NaiveDate) -> bool {
        days_between(from, to) >= i64::from(self.min_nights)
    }

    /// Validate a range, accumulating ALL violations.
    ///
    /// Caller checks only run once both endpoints are present.
    pub fn validate(&self, range: &DateRange) -> StayValidation {
        let mut checks: Vec<StayValidation> = Vec::new();

        checks.push(match range.from {
            Some(_) => Validation::success(()),
            None => Validation::fail(StayViolation::MissingCheckIn),
        });
        checks.push(match range.to {
            Some(_) => Validation::success(()),
            None => Validation::fail(StayViolation::MissingCheckOut),
        });

        if let Some((from, to)) = range.endpoints() {
            let nights = days_between(from, to);
            checks.push(if self.allows_checkout(from, to) {
                Validation::success(())
            } else {
                Validation::fail(StayViolation::TooShort {
                    min: self.min_nights,
                    nights,
                })
            });

            for check_fn in &self.required_checks {
                checks.push(check_fn(range));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Shorthand for a successful [`validate`](Self::validate).
    pub fn permits(&self, range: &DateRange) -> bool {
        self.validate(range).is_success()
    }
}

impl Default for StayPolicy {
    fn default() -> Self {
        Self::with_min_nights(1)
    }
}

impl fmt::Debug for StayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StayPolicy")
            .field("min_nights", &self.min_nights)
            .field("required_checks", &self.required_checks.len())
            .finish()
    }
}

/// Collect the violations of a failed validation.
pub fn violations_of(validation: StayValidation) -> Vec<StayViolation> {
    match validation {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
