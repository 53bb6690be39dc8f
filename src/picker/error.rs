//! Confirmation errors.

use crate::policy::StayViolation;
use thiserror::Error;

fn describe(violations: &[StayViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Why a confirm request left the session untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfirmError {
    #[error("No selection session is open")]
    NotOpen,

    #[error("Selection cannot be confirmed: {}", describe(.0))]
    Invalid(Vec<StayViolation>),
}

impl ConfirmError {
    /// Violations behind an `Invalid` error; empty otherwise.
    pub fn violations(&self) -> &[StayViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::NotOpen => &[],
        }
    }
}
