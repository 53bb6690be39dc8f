//! Selection states of the date-range machine.
//!
//! The state is never stored on its own: it is always derived from the
//! provisional [`DateRange`], so the two can never disagree.

use crate::calendar::DateRange;
use serde::{Deserialize, Serialize};

/// Conceptual state of a provisional date range.
///
/// # Example
///
/// ```rust
/// use booking_search::calendar::DateRange;
/// use booking_search::core::SelectionState;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
///
/// assert_eq!(SelectionState::of(&DateRange::empty()), SelectionState::Empty);
/// assert_eq!(
///     SelectionState::of(&DateRange::starting(from)),
///     SelectionState::PartialStart
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum SelectionState {
    /// Neither endpoint set.
    Empty,
    /// Check-in chosen, waiting for check-out.
    PartialStart,
    /// Both endpoints set.
    Complete,
}

impl SelectionState {
    /// Derive the state from a range.
    ///
    /// A range with only `to` set cannot be produced by the machine; it is
    /// treated as `Empty` so the next click restarts the selection.
    pub fn of(range: &DateRange) -> Self {
        match (range.from, range.to) {
            (Some(_), Some(_)) => Self::Complete,
            (Some(_), None) => Self::PartialStart,
            (None, _) => Self::Empty,
        }
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::PartialStart => "PartialStart",
            Self::Complete => "Complete",
        }
    }

    /// Whether both endpoints are present.
    ///
    /// A final state is the only one from which a session may be confirmed,
    /// although the stay policy can still refuse it.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Whether the next click starts a new range rather than closing one.
    pub fn restarts_on_click(&self) -> bool {
        !matches!(self, Self::PartialStart)
    }
}

impl std::fmt::Display for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
