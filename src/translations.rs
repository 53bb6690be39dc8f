//! Display strings.
//!
//! Every string has an English default. Deserializing a partial map keeps the
//! defaults for missing keys, which is how callers supply translations.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the minimum stay in `select_check_out_min`.
pub const MIN_NIGHTS_PLACEHOLDER: &str = "{minNights}";

/// All user-facing strings of the booking search.
///
/// # Example
///
/// ```rust
/// use booking_search::translations::Translations;
///
/// let italian: Translations = serde_json::from_str(
///     r#"{ "night": "notte", "nights": "notti", "confirm": "Conferma" }"#,
/// ).unwrap();
///
/// assert_eq!(italian.nights_label(1), "1 notte");
/// assert_eq!(italian.nights_label(4), "4 notti");
/// assert_eq!(italian.cancel, "Cancel");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Translations {
    // Location
    pub destination: String,
    pub where_to_go: String,
    pub search_destination: String,
    pub no_location_found: String,

    // Dates
    pub check_in_check_out: String,
    pub select_date_range: String,
    pub night: String,
    pub nights: String,
    pub select_check_out: String,
    /// Use `{minNights}` where the minimum stay goes.
    pub select_check_out_min: String,

    // Guests
    pub guests: String,
    pub adults: String,
    pub adults_description: String,
    pub children: String,
    pub children_description: String,
    pub adult: String,
    pub adults_plural: String,
    pub child: String,
    pub children_plural: String,
    pub guest: String,
    pub guests_plural: String,

    // Buttons
    pub confirm: String,
    pub cancel: String,
    pub search: String,

    // Dialog
    pub search_accommodation: String,
    pub open_search: String,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            destination: "Destination".into(),
            where_to_go: "Where do you want to go?".into(),
            search_destination: "Search a destination...".into(),
            no_location_found: "No location found.".into(),
            check_in_check_out: "Check-in - Check-out".into(),
            select_date_range: "Select Date Range".into(),
            night: "night".into(),
            nights: "nights".into(),
            select_check_out: "Select check-out".into(),
            select_check_out_min: "Select check-out (min. {minNights} nights)".into(),
            guests: "Guests".into(),
            adults: "Adults".into(),
            adults_description: "Age 18+".into(),
            children: "Children".into(),
            children_description: "Age 0-17".into(),
            adult: "adult".into(),
            adults_plural: "adults".into(),
            child: "child".into(),
            children_plural: "children".into(),
            guest: "guest".into(),
            guests_plural: "guests".into(),
            confirm: "Confirm".into(),
            cancel: "Cancel".into(),
            search: "Search".into(),
            search_accommodation: "Search your accommodation".into(),
            open_search: "Open booking search".into(),
        }
    }
}

fn counted(count: i64, singular: &str, plural: &str) -> String {
    let word = if count == 1 { singular } else { plural };
    format!("{count} {word}")
}

impl Translations {
    /// Check-out prompt annotated with the minimum stay.
    pub fn select_check_out_min(&self, min_nights: u32) -> String {
        self.select_check_out_min
            .replace(MIN_NIGHTS_PLACEHOLDER, &min_nights.to_string())
    }

    /// `"1 night"`, `"3 nights"`.
    pub fn nights_label(&self, nights: i64) -> String {
        counted(nights, &self.night, &self.nights)
    }

    pub fn adults_label(&self, adults: u32) -> String {
        counted(i64::from(adults), &self.adult, &self.adults_plural)
    }

    pub fn children_label(&self, children: u32) -> String {
        counted(i64::from(children), &self.child, &self.children_plural)
    }

    pub fn guests_label(&self, guests: u32) -> String {
        counted(i64::from(guests), &self.guest, &self.guests_plural)
    }
}
