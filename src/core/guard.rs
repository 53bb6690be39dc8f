//! Guard predicates for dates and ranges.
//!
//! Guards are pure boolean functions. The picker uses them to let callers
//! narrow which days are selectable, and the stay policy uses them for
//! caller-defined confirmation rules.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over a value of type `T`.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use booking_search::core::Guard;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// // No check-in on Sundays
/// let not_sunday = Guard::new(|d: &NaiveDate| d.weekday() != Weekday::Sun);
///
/// assert!(not_sunday.check(&NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
/// assert!(!not_sunday.check(&NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard accepts this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Guard accepting only values both guards accept.
    pub fn and(self, other: Guard<T>) -> Self
    where
        T: 'static,
    {
        Guard::new(move |value: &T| self.check(value) && other.check(value))
    }

    /// Guard accepting exactly what this one rejects.
    pub fn negate(self) -> Self
    where
        T: 'static,
    {
        Guard::new(move |value: &T| !self.check(value))
    }
}

impl<T: ?Sized> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Guard {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn guard_allows_matching_values() {
        let guard = Guard::new(|d: &NaiveDate| *d >= day(10));

        assert!(guard.check(&day(10)));
        assert!(guard.check(&day(20)));
        assert!(!guard.check(&day(9)));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|d: &NaiveDate| *d != day(15));

        assert_eq!(guard.check(&day(15)), guard.check(&day(15)));
        assert_eq!(guard.check(&day(16)), guard.check(&day(16)));
    }

    #[test]
    fn and_requires_both_guards() {
        let after = Guard::new(|d: &NaiveDate| *d > day(5));
        let before = Guard::new(|d: &NaiveDate| *d < day(10));
        let window = after.and(before);

        assert!(window.check(&day(7)));
        assert!(!window.check(&day(5)));
        assert!(!window.check(&day(10)));
    }

    #[test]
    fn negate_inverts_guard() {
        let weekend = Guard::new(|d: &NaiveDate| *d == day(11) || *d == day(12));
        let weekday = weekend.negate();

        assert!(weekday.check(&day(10)));
        assert!(!weekday.check(&day(11)));
    }

    #[test]
    fn clones_share_predicate() {
        let guard = Guard::new(|n: &u32| n % 2 == 0);
        let cloned = guard.clone();

        assert_eq!(guard.check(&4), cloned.check(&4));
        assert_eq!(guard.check(&3), cloned.check(&3));
    }
}
