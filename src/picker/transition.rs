//! Pure transition logic for range selection.
//!
//! Nothing in this file touches picker state. The `DateRangePicker` shell
//! calls these functions and applies their results.

use crate::calendar::{days_between, AvailabilityIndex, DateRange};
use crate::core::SelectionState;
use crate::policy::StayPolicy;
use crate::translations::Translations;
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Why a click was absorbed without being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No session is open
    NotOpen,
    /// The day is unavailable or otherwise not selectable
    DisabledDate,
}

/// Result of handling a single day click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new range was started at the clicked day
    Started(DateRange),

    /// The clicked day preceded check-in and became the new check-in
    Reordered(DateRange),

    /// The clicked day became check-out
    Completed(DateRange),

    /// The stay would be shorter than the minimum; nothing changed
    Rejected { nights: i64, min_nights: u32 },

    /// The click was not considered; nothing changed
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    /// The new provisional range, if the click changed it.
    pub fn range(&self) -> Option<DateRange> {
        match self {
            Self::Started(range) | Self::Reordered(range) | Self::Completed(range) => Some(*range),
            Self::Rejected { .. } | Self::Ignored(_) => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.range().is_some()
    }
}

/// Compute the provisional range after clicking `clicked`.
///
/// - From `Empty` or `Complete`, any click starts a new range.
/// - From `PartialStart`, an earlier day swaps in as check-in; a later day
///   becomes check-out only if the stay meets the policy's minimum.
///
/// # Example
///
/// ```rust
/// use booking_search::calendar::DateRange;
/// use booking_search::picker::{next_range, ClickOutcome};
/// use booking_search::policy::StayPolicy;
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
/// let policy = StayPolicy::with_min_nights(3);
///
/// let partial = DateRange::starting(day(10));
/// assert!(matches!(
///     next_range(&partial, day(12), &policy),
///     ClickOutcome::Rejected { nights: 2, min_nights: 3 }
/// ));
/// assert_eq!(
///     next_range(&partial, day(13), &policy),
///     ClickOutcome::Completed(DateRange::new(day(10), day(13)))
/// );
/// ```
pub fn next_range(current: &DateRange, clicked: NaiveDate, policy: &StayPolicy) -> ClickOutcome {
    let from = match current.from {
        Some(from) if !SelectionState::of(current).restarts_on_click() => from,
        _ => return ClickOutcome::Started(DateRange::starting(clicked)),
    };

    if clicked < from {
        return ClickOutcome::Reordered(DateRange::new(clicked, from));
    }

    if !policy.allows_checkout(from, clicked) {
        return ClickOutcome::Rejected {
            nights: days_between(from, clicked),
            min_nights: policy.min_nights(),
        };
    }

    ClickOutcome::Completed(DateRange {
        from: Some(from),
        to: Some(clicked),
    })
}

/// Days after `from` that are too early to check out, up to `until`.
///
/// Empty when `min_nights <= 1` or `until` is not after `from`.
pub fn min_stay_window(from: NaiveDate, min_nights: u32, until: NaiveDate) -> Vec<NaiveDate> {
    let last_blocked = from
        .checked_add_days(Days::new(u64::from(min_nights.saturating_sub(1))))
        .map_or(until, |day| day.min(until));

    from.iter_days()
        .skip(1)
        .take_while(|day| *day <= last_blocked)
        .collect()
}

/// Dates that cannot be clicked for the given provisional range.
///
/// Unavailable days are always included. While only check-in is chosen the
/// days inside the minimum-stay window are included as well, up to the last
/// indexed day.
pub fn disabled_dates(
    availability: &AvailabilityIndex,
    provisional: &DateRange,
    min_nights: u32,
) -> BTreeSet<NaiveDate> {
    let mut disabled: BTreeSet<NaiveDate> = availability.unavailable_dates().collect();

    if SelectionState::of(provisional) == SelectionState::PartialStart {
        if let (Some(from), Some(last)) = (provisional.from, availability.last_date()) {
            disabled.extend(min_stay_window(from, min_nights, last));
        }
    }

    disabled
}

/// Text shown inside the open picker.
pub fn session_text(range: &DateRange, min_nights: u32, translations: &Translations) -> String {
    match SelectionState::of(range) {
        SelectionState::Empty => translations.select_date_range.clone(),
        SelectionState::PartialStart if min_nights > 1 => {
            translations.select_check_out_min(min_nights)
        }
        SelectionState::PartialStart => translations.select_check_out.clone(),
        SelectionState::Complete => {
            let nights = range.nights().unwrap_or_default();
            translations.nights_label(nights)
        }
    }
}

/// Text shown on the closed trigger for a committed range.
pub fn trigger_text(range: &DateRange, translations: &Translations) -> String {
    match (range.from, range.to) {
        (Some(from), Some(to)) => format!("{} - {}", from.format("%d %b"), to.format("%d %b")),
        (Some(from), None) => from.format("%d %b %Y").to_string(),
        _ => translations.select_date_range.clone(),
    }
}
