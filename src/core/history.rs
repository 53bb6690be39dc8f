//! Click history for one selection session.
//!
//! History is an immutable value: recording returns a new history and the
//! original is left untouched.

use super::state::SelectionState;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single day click and the state change it produced.
///
/// Rejected and ignored clicks are recorded too, with `from == to` and
/// `accepted == false`.
///
/// # Example
///
/// ```rust
/// use booking_search::core::{ClickTransition, SelectionState};
/// use chrono::{NaiveDate, Utc};
///
/// let click = ClickTransition {
///     from: SelectionState::Empty,
///     to: SelectionState::PartialStart,
///     clicked: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     timestamp: Utc::now(),
///     accepted: true,
/// };
/// assert!(click.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClickTransition {
    /// State before the click
    pub from: SelectionState,
    /// State after the click
    pub to: SelectionState,
    /// The day that was clicked
    pub clicked: NaiveDate,
    /// When the click was handled
    pub timestamp: DateTime<Utc>,
    /// Whether the click changed the provisional range
    pub accepted: bool,
}

impl ClickTransition {
    /// Whether the click moved the machine to a different state.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of clicks within a session.
///
/// # Example
///
/// ```rust
/// use booking_search::core::{ClickTransition, SelectionHistory, SelectionState};
/// use chrono::{NaiveDate, Utc};
///
/// let history = SelectionHistory::new();
/// let history = history.record(ClickTransition {
///     from: SelectionState::Empty,
///     to: SelectionState::PartialStart,
///     clicked: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     timestamp: Utc::now(),
///     accepted: true,
/// });
/// let history = history.record(ClickTransition {
///     from: SelectionState::PartialStart,
///     to: SelectionState::Complete,
///     clicked: NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
///     timestamp: Utc::now(),
///     accepted: true,
/// });
///
/// assert_eq!(
///     history.get_path(),
///     vec![
///         SelectionState::Empty,
///         SelectionState::PartialStart,
///         SelectionState::Complete
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionHistory {
    clicks: Vec<ClickTransition>,
}

impl SelectionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { clicks: Vec::new() }
    }

    /// Record a click, returning a new history.
    ///
    /// Copies the existing clicks, so a session of `n` clicks costs O(n²).
    pub fn record(&self, click: ClickTransition) -> Self {
        let mut clicks = self.clicks.clone();
        clicks.push(click);
        Self { clicks }
    }

    /// States traversed, skipping clicks that left the state unchanged.
    ///
    /// Starts with the `from` state of the first click.
    pub fn get_path(&self) -> Vec<SelectionState> {
        let mut path = Vec::new();
        if let Some(first) = self.clicks.first() {
            path.push(first.from);
        }
        for click in self.clicks.iter().filter(|c| c.changed_state()) {
            path.push(click.to);
        }
        path
    }

    /// Time between the first and last click.
    pub fn duration(&self) -> Option<Duration> {
        match (self.clicks.first(), self.clicks.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    /// Number of clicks that did not change the range.
    pub fn rejected_count(&self) -> usize {
        self.clicks.iter().filter(|c| !c.accepted).count()
    }

    /// All recorded clicks in order.
    pub fn clicks(&self) -> &[ClickTransition] {
        &self.clicks
    }

    pub fn is_empty(&self) -> bool {
        self.clicks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn click(from: SelectionState, to: SelectionState, d: u32, accepted: bool) -> ClickTransition {
        ClickTransition {
            from,
            to,
            clicked: day(d),
            timestamp: Utc::now(),
            accepted,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = SelectionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = SelectionHistory::new();
        let next = history.record(click(
            SelectionState::Empty,
            SelectionState::PartialStart,
            10,
            true,
        ));

        assert_eq!(history.clicks().len(), 0);
        assert_eq!(next.clicks().len(), 1);
    }

    #[test]
    fn path_skips_clicks_without_state_change() {
        let history = SelectionHistory::new()
            .record(click(SelectionState::Empty, SelectionState::PartialStart, 10, true))
            .record(click(
                SelectionState::PartialStart,
                SelectionState::PartialStart,
                11,
                false,
            ))
            .record(click(SelectionState::PartialStart, SelectionState::Complete, 13, true));

        assert_eq!(
            history.get_path(),
            vec![
                SelectionState::Empty,
                SelectionState::PartialStart,
                SelectionState::Complete
            ]
        );
        assert_eq!(history.rejected_count(), 1);
    }

    #[test]
    fn single_click_has_zero_duration() {
        let history =
            SelectionHistory::new().record(click(SelectionState::Empty, SelectionState::PartialStart, 3, true));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            SelectionHistory::new().record(click(SelectionState::Empty, SelectionState::PartialStart, 3, true));

        let json = serde_json::to_string(&history).unwrap();
        let back: SelectionHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }
}
