//! Builder API for stay policies.

use crate::builder::BuildError;
use crate::calendar::DateRange;
use crate::core::Guard;
use crate::policy::rules::{RangeCheck, StayPolicy, StayValidation};
use crate::policy::violations::StayViolation;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Builder for creating stay policies
pub struct StayPolicyBuilder {
    min_nights: u32,
    required_checks: Vec<RangeCheck>,
}

impl StayPolicyBuilder {
    pub fn new() -> Self {
        Self {
            min_nights: 1,
            required_checks: Vec::new(),
        }
    }

    /// Set the minimum number of nights (must be at least 1)
    pub fn min_nights(mut self, n: u32) -> Self {
        self.min_nights = n;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&DateRange) -> StayValidation + Send + Sync + 'static,
    {
        self.required_checks.push(Arc::new(check));
        self
    }

    /// Add a guard over the complete range with an error message
    pub fn require_pred(mut self, guard: Guard<DateRange>, error_msg: String) -> Self {
        let check = move |range: &DateRange| {
            if guard.check(range) {
                Validation::success(())
            } else {
                Validation::fail(StayViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Arc::new(check));
        self
    }

    /// Build the policy
    pub fn build(self) -> Result<StayPolicy, BuildError> {
        if self.min_nights == 0 {
            return Err(BuildError::InvalidMinNights(self.min_nights));
        }

        Ok(StayPolicy {
            min_nights: self.min_nights,
            required_checks: self.required_checks,
        })
    }
}

impl Default for StayPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
