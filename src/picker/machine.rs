//! The date-range picker: committed range, open session and callbacks.

use crate::calendar::{AvailabilityIndex, DateRange};
use crate::core::{Guard, SelectionHistory, SelectionState};
use crate::picker::error::ConfirmError;
use crate::picker::session::SelectionSession;
use crate::picker::transition::{self, ClickOutcome, IgnoreReason};
use crate::policy::{violations_of, StayPolicy};
use crate::translations::Translations;
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info, trace};

/// Called with the confirmed range, once per confirmed session.
pub type ConfirmCallback = Box<dyn FnMut(DateRange) + Send>;

/// Called when a session is cancelled.
pub type CancelCallback = Box<dyn FnMut() + Send>;

/// Callbacks fired at the end of a session.
///
/// `on_confirm` fires at most once per session, after the committed range
/// has been updated. `on_cancel` fires at most once per session and never
/// together with `on_confirm`.
#[derive(Default)]
pub struct PickerCallbacks {
    pub on_confirm: Option<ConfirmCallback>,
    pub on_cancel: Option<CancelCallback>,
}

impl fmt::Debug for PickerCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerCallbacks")
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

/// What a calendar cell needs to render one day.
#[derive(Clone, Debug, PartialEq)]
pub struct DayAnnotation {
    pub date: NaiveDate,
    /// Day of month
    pub day: u32,
    /// Price label, only for indexed and bookable days
    pub price_label: Option<String>,
    pub disabled: bool,
    pub is_start: bool,
    pub is_end: bool,
    /// Strictly between start and end
    pub in_range: bool,
}

/// Date-range picker with buffered confirm/cancel semantics.
///
/// Clicks only ever change the provisional range of the open session. The
/// committed range changes through [`confirm`](Self::confirm) or
/// [`set_committed`](Self::set_committed) and nothing else.
///
/// # Example
///
/// ```rust
/// use booking_search::builder::DateRangePickerBuilder;
/// use booking_search::calendar::DateRange;
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
///
/// let mut picker = DateRangePickerBuilder::new().min_nights(2).build().unwrap();
///
/// picker.open();
/// picker.click(day(10));
/// picker.click(day(11)); // too short, ignored
/// picker.click(day(12));
///
/// assert_eq!(picker.confirm(), Ok(DateRange::new(day(10), day(12))));
/// assert_eq!(picker.committed(), &DateRange::new(day(10), day(12)));
/// assert!(!picker.is_open());
/// ```
pub struct DateRangePicker {
    pub(crate) availability: AvailabilityIndex,
    pub(crate) policy: StayPolicy,
    pub(crate) selectable: Option<Guard<NaiveDate>>,
    pub(crate) committed: DateRange,
    pub(crate) session: Option<SelectionSession>,
    pub(crate) disabled: bool,
    pub(crate) translations: Translations,
    pub(crate) currency_symbol: String,
    pub(crate) callbacks: PickerCallbacks,
}

impl DateRangePicker {
    /// Picker with default policy, strings and no callbacks.
    pub fn new(availability: AvailabilityIndex) -> Self {
        Self {
            availability,
            policy: StayPolicy::default(),
            selectable: None,
            committed: DateRange::empty(),
            session: None,
            disabled: false,
            translations: Translations::default(),
            currency_symbol: "€".to_string(),
            callbacks: PickerCallbacks::default(),
        }
    }

    /// Open a session, starting from the committed range.
    ///
    /// Returns `false` when the picker is disabled. Opening an already open
    /// picker keeps its current session.
    pub fn open(&mut self) -> bool {
        if self.disabled {
            debug!("picker is disabled, not opening");
            return false;
        }
        if let Some(session) = &self.session {
            trace!(session = %session.id(), "picker already open");
            return true;
        }

        let session = SelectionSession::open(self.committed);
        debug!(
            session = %session.id(),
            state = session.state().name(),
            "selection session opened"
        );
        self.session = Some(session);
        true
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Handle a click on a calendar day.
    pub fn click(&mut self, date: NaiveDate) -> ClickOutcome {
        let disabled = self.is_disabled(date);
        let Some(session) = self.session.as_mut() else {
            debug!(clicked = %date, "click without open session ignored");
            return ClickOutcome::Ignored(IgnoreReason::NotOpen);
        };

        let outcome = if disabled {
            ClickOutcome::Ignored(IgnoreReason::DisabledDate)
        } else {
            transition::next_range(session.provisional(), date, &self.policy)
        };

        let before = session.state();
        session.apply(date, &outcome);
        debug!(
            session = %session.id(),
            clicked = %date,
            from = before.name(),
            to = session.state().name(),
            accepted = outcome.is_accepted(),
            "day click handled"
        );

        outcome
    }

    /// Commit the provisional range and end the session.
    ///
    /// On error the session stays open and unchanged and no callback fires.
    pub fn confirm(&mut self) -> Result<DateRange, ConfirmError> {
        let session = self.session.as_ref().ok_or(ConfirmError::NotOpen)?;
        let range = *session.provisional();

        let violations = violations_of(self.policy.validate(&range));
        if !violations.is_empty() {
            debug!(
                session = %session.id(),
                violations = violations.len(),
                "confirm refused"
            );
            return Err(ConfirmError::Invalid(violations));
        }

        let id = session.id();
        let open_ms = (Utc::now() - session.opened_at()).num_milliseconds();
        self.session = None;
        self.committed = range;
        info!(
            session = %id,
            nights = range.nights().unwrap_or_default(),
            total = self.availability.stay_total(&range),
            open_ms,
            "selection confirmed"
        );

        if let Some(on_confirm) = self.callbacks.on_confirm.as_mut() {
            on_confirm(range);
        }
        Ok(range)
    }

    /// Discard the session without touching the committed range.
    ///
    /// Returns `false` if no session was open.
    pub fn cancel(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };

        let history = session.history();
        info!(
            session = %session.id(),
            clicks = history.clicks().len(),
            clicking_secs = history.duration().map(|d| d.as_secs_f64()),
            "selection cancelled"
        );
        if let Some(on_cancel) = self.callbacks.on_cancel.as_mut() {
            on_cancel();
        }
        true
    }

    /// Whether [`confirm`](Self::confirm) would succeed right now.
    ///
    /// The confirm control should be disabled whenever this is `false`.
    pub fn can_confirm(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| self.policy.permits(s.provisional()))
    }

    /// Replace the committed range from outside.
    ///
    /// Endpoints are put in order. An open session is re-synchronised.
    pub fn set_committed(&mut self, range: DateRange) {
        let range = match range.endpoints() {
            Some((a, b)) => DateRange::new(a, b),
            None => range,
        };
        self.committed = range;
        if let Some(session) = self.session.as_mut() {
            debug!(session = %session.id(), "committed range changed, resyncing");
            session.resync(range);
        }
    }

    /// Replace the availability index.
    pub fn set_availability(&mut self, availability: AvailabilityIndex) {
        self.availability = availability;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn committed(&self) -> &DateRange {
        &self.committed
    }

    pub fn provisional(&self) -> Option<&DateRange> {
        self.session.as_ref().map(SelectionSession::provisional)
    }

    pub fn session(&self) -> Option<&SelectionSession> {
        self.session.as_ref()
    }

    pub fn history(&self) -> Option<&SelectionHistory> {
        self.session.as_ref().map(SelectionSession::history)
    }

    /// State of the open session, or of the committed range when closed.
    pub fn state(&self) -> SelectionState {
        SelectionState::of(self.provisional().unwrap_or(&self.committed))
    }

    pub fn min_nights(&self) -> u32 {
        self.policy.min_nights()
    }

    pub fn availability(&self) -> &AvailabilityIndex {
        &self.availability
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn is_picker_disabled(&self) -> bool {
        self.disabled
    }

    /// Indexed dates that cannot be clicked right now.
    ///
    /// Covers unavailable days, days the `selectable_when` guard rejects and
    /// the minimum-stay window. Only dates up to the end of the index are
    /// enumerated; [`is_disabled`](Self::is_disabled) answers for any day.
    pub fn disabled_dates(&self) -> BTreeSet<NaiveDate> {
        let provisional = self.provisional().copied().unwrap_or_default();
        let mut disabled =
            transition::disabled_dates(&self.availability, &provisional, self.min_nights());
        if let Some(guard) = &self.selectable {
            disabled.extend(
                self.availability
                    .iter()
                    .map(|entry| entry.date)
                    .filter(|date| !guard.check(date)),
            );
        }
        trace!(count = disabled.len(), "disabled dates computed");
        disabled
    }

    /// Whether `date` is not clickable right now.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        if self.availability.is_available(date) == Some(false) {
            return true;
        }
        if self.selectable.as_ref().is_some_and(|g| !g.check(&date)) {
            return true;
        }
        match self.provisional() {
            Some(range) if SelectionState::of(range) == SelectionState::PartialStart => range
                .from
                .is_some_and(|from| date > from && !self.policy.allows_checkout(from, date)),
            _ => false,
        }
    }

    /// Text inside the open picker; `None` when closed.
    pub fn session_label(&self) -> Option<String> {
        self.provisional()
            .map(|range| transition::session_text(range, self.min_nights(), &self.translations))
    }

    /// Text on the closed trigger control.
    pub fn trigger_label(&self) -> String {
        transition::trigger_text(&self.committed, &self.translations)
    }

    /// Rendering data for one calendar day.
    pub fn day_annotation(&self, date: NaiveDate) -> DayAnnotation {
        let range = self.provisional().copied().unwrap_or(self.committed);
        let in_range = range
            .endpoints()
            .is_some_and(|(from, to)| from < date && date < to);

        DayAnnotation {
            date,
            day: date.day(),
            price_label: self
                .availability
                .price(date)
                .map(|price| format!("{}{}", self.currency_symbol, price)),
            disabled: self.is_disabled(date),
            is_start: range.from == Some(date),
            is_end: range.to == Some(date),
            in_range,
        }
    }
}

impl fmt::Debug for DateRangePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangePicker")
            .field("committed", &self.committed)
            .field("session", &self.session)
            .field("policy", &self.policy)
            .field("disabled", &self.disabled)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
