//! Per-day price and availability, indexed by date.

use super::error::AvailabilityError;
use super::range::DateRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price and bookability of one calendar day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub date: NaiveDate,
    pub price: f64,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
}

impl AvailabilityEntry {
    pub fn available(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price,
            is_available: true,
        }
    }

    pub fn unavailable(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price,
            is_available: false,
        }
    }
}

/// Read-only, date-keyed view over an availability list.
///
/// Input order does not matter. When a date appears more than once the last
/// entry wins.
///
/// # Example
///
/// ```rust
/// use booking_search::calendar::{AvailabilityEntry, AvailabilityIndex};
/// use chrono::NaiveDate;
///
/// let d15 = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let d16 = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
///
/// let index = AvailabilityIndex::new([
///     AvailabilityEntry::available(d15, 120.0),
///     AvailabilityEntry::unavailable(d16, 120.0),
/// ]);
///
/// assert_eq!(index.is_available(d15), Some(true));
/// assert_eq!(index.unavailable_dates().collect::<Vec<_>>(), vec![d16]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvailabilityIndex {
    days: BTreeMap<NaiveDate, AvailabilityEntry>,
}

impl AvailabilityIndex {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = AvailabilityEntry>,
    {
        let days = entries
            .into_iter()
            .map(|entry| (entry.date, entry))
            .collect();
        Self { days }
    }

    /// Parse a JSON array of availability entries.
    ///
    /// Dates must be ISO `YYYY-MM-DD` and prices finite and non-negative.
    pub fn from_json(json: &str) -> Result<Self, AvailabilityError> {
        let entries: Vec<AvailabilityEntry> = serde_json::from_str(json)?;
        for entry in &entries {
            if !entry.price.is_finite() || entry.price < 0.0 {
                return Err(AvailabilityError::InvalidPrice {
                    date: entry.date,
                    price: entry.price,
                });
            }
        }
        Ok(Self::new(entries))
    }

    pub fn get(&self, date: NaiveDate) -> Option<&AvailabilityEntry> {
        self.days.get(&date)
    }

    /// Bookability of `date`, or `None` when the date is not indexed.
    pub fn is_available(&self, date: NaiveDate) -> Option<bool> {
        self.get(date).map(|entry| entry.is_available)
    }

    /// Price of `date`, only when it is indexed and bookable.
    pub fn price(&self, date: NaiveDate) -> Option<f64> {
        self.get(date)
            .filter(|entry| entry.is_available)
            .map(|entry| entry.price)
    }

    /// Dates explicitly marked unavailable, in ascending order.
    pub fn unavailable_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .values()
            .filter(|entry| !entry.is_available)
            .map(|entry| entry.date)
    }

    /// Sum of nightly prices for the nights of a complete stay.
    ///
    /// Returns `None` for an incomplete range, or if any night is missing
    /// from the index or unavailable.
    pub fn stay_total(&self, range: &DateRange) -> Option<f64> {
        range.endpoints()?;
        range.stay_dates().into_iter().map(|d| self.price(d)).sum()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AvailabilityEntry> {
        self.days.values()
    }
}

impl FromIterator<AvailabilityEntry> for AvailabilityIndex {
    fn from_iter<I: IntoIterator<Item = AvailabilityEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}
