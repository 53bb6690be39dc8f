//! Date ranges and night arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of nights between two calendar days.
///
/// Negative when `to` is before `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// A stay, possibly still being selected.
///
/// `from` is the check-in day and `to` the check-out day. When both are
/// present the picker guarantees `from < to`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// A range with no endpoints.
    pub const fn empty() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// A range with only the check-in day chosen.
    pub const fn starting(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// A complete range; endpoints are put in chronological order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        let (from, to) = if b < a { (b, a) } else { (a, b) };
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Both endpoints, if present.
    pub fn endpoints(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from.zip(self.to)
    }

    /// Nights between check-in and check-out, if both are set.
    pub fn nights(&self) -> Option<i64> {
        self.endpoints().map(|(from, to)| days_between(from, to))
    }

    /// Nights of the stay as calendar days, check-out excluded.
    pub fn stay_dates(&self) -> Vec<NaiveDate> {
        match self.endpoints() {
            Some((from, to)) => from.iter_days().take_while(|d| *d < to).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn days_between_counts_nights() {
        assert_eq!(days_between(day(10), day(13)), 3);
        assert_eq!(days_between(day(10), day(10)), 0);
        assert_eq!(days_between(day(13), day(10)), -3);
    }

    #[test]
    fn days_between_crosses_month_boundary() {
        let jan31 = day(31);
        let feb2 = NaiveDate::from_ymd_opt(2025, 2, 2).unwrap();
        assert_eq!(days_between(jan31, feb2), 2);
    }

    #[test]
    fn new_orders_endpoints() {
        let range = DateRange::new(day(20), day(12));
        assert_eq!(range.from, Some(day(12)));
        assert_eq!(range.to, Some(day(20)));
        assert_eq!(range.nights(), Some(8));
    }

    #[test]
    fn partial_range_has_no_nights() {
        assert_eq!(DateRange::starting(day(3)).nights(), None);
        assert_eq!(DateRange::empty().nights(), None);
    }

    #[test]
    fn stay_dates_exclude_checkout() {
        let range = DateRange::new(day(5), day(8));
        assert_eq!(range.stay_dates(), vec![day(5), day(6), day(7)]);
    }

    #[test]
    fn range_serializes_as_iso_dates() {
        let json = serde_json::to_string(&DateRange::new(day(5), day(8))).unwrap();
        assert_eq!(json, r#"{"from":"2025-01-05","to":"2025-01-08"}"#);
    }
}
