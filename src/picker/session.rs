//! Ephemeral state of one open picker interaction.

use crate::calendar::DateRange;
use crate::core::{ClickTransition, SelectionHistory, SelectionState};
use crate::picker::transition::ClickOutcome;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// The provisional range of one open/close cycle.
///
/// A session starts as a copy of the committed range and is discarded when
/// the picker closes. It is never shared between cycles.
#[derive(Clone, Debug)]
pub struct SelectionSession {
    id: Uuid,
    provisional: DateRange,
    history: SelectionHistory,
    opened_at: DateTime<Utc>,
}

impl SelectionSession {
    pub(crate) fn open(committed: DateRange) -> Self {
        Self {
            id: Uuid::new_v4(),
            provisional: committed,
            history: SelectionHistory::new(),
            opened_at: Utc::now(),
        }
    }

    /// Identifier attached to log events of this session
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn provisional(&self) -> &DateRange {
        &self.provisional
    }

    pub fn state(&self) -> SelectionState {
        SelectionState::of(&self.provisional)
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Record a click and adopt the range it produced, if any.
    pub(crate) fn apply(&mut self, clicked: NaiveDate, outcome: &ClickOutcome) {
        let before = self.state();
        if let Some(range) = outcome.range() {
            self.provisional = range;
        }

        self.history = self.history.record(ClickTransition {
            from: before,
            to: self.state(),
            clicked,
            timestamp: Utc::now(),
            accepted: outcome.is_accepted(),
        });
    }

    /// Replace the provisional range with a new committed range.
    pub(crate) fn resync(&mut self, committed: DateRange) {
        self.provisional = committed;
    }
}
