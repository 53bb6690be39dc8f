//! Builder for constructing booking search forms.

use crate::builder::error::BuildError;
use crate::builder::picker::DateRangePickerBuilder;
use crate::calendar::{AvailabilityIndex, DateRange};
use crate::config::SearchConfig;
use crate::guests::{GuestCount, GuestSelector};
use crate::location::{LocationCombobox, SearchLocation};
use crate::search::{BookingSearch, BookingSearchPayload, SearchCallback};

/// Builder for a [`BookingSearch`].
///
/// # Example
///
/// ```rust
/// use booking_search::builder::BookingSearchBuilder;
/// use booking_search::calendar::DateRange;
/// use booking_search::location::SearchLocation;
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
///
/// let mut search = BookingSearchBuilder::new()
///     .locations(vec![SearchLocation::new("1", "Roma, Italia")])
///     .default_location("1")
///     .default_dates(DateRange::new(day(5), day(8)))
///     .on_search(|payload| println!("searching {payload:?}"))
///     .build()
///     .unwrap();
///
/// let payload = search.search().unwrap();
/// assert_eq!(payload.adults, 2);
/// assert_eq!(payload.check_in, Some(day(5)));
/// ```
pub struct BookingSearchBuilder {
    config: SearchConfig,
    availability: AvailabilityIndex,
    locations: Vec<SearchLocation>,
    default_location: Option<String>,
    default_dates: DateRange,
    default_guests: Option<GuestCount>,
    on_search: Option<SearchCallback>,
}

impl BookingSearchBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
            availability: AvailabilityIndex::default(),
            locations: Vec::new(),
            default_location: None,
            default_dates: DateRange::empty(),
            default_guests: None,
            on_search: None,
        }
    }

    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn availability(mut self, availability: AvailabilityIndex) -> Self {
        self.availability = availability;
        self
    }

    pub fn locations(mut self, locations: Vec<SearchLocation>) -> Self {
        self.locations = locations;
        self
    }

    /// Preselect a location by id (must be in the list).
    pub fn default_location(mut self, id: impl Into<String>) -> Self {
        self.default_location = Some(id.into());
        self
    }

    pub fn default_dates(mut self, range: DateRange) -> Self {
        self.default_dates = range;
        self
    }

    /// Initial guests; falls back to the configured defaults.
    pub fn default_guests(mut self, guests: GuestCount) -> Self {
        self.default_guests = Some(guests);
        self
    }

    /// Set the search callback (required).
    pub fn on_search<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&BookingSearchPayload) + Send + 'static,
    {
        self.on_search = Some(Box::new(callback));
        self
    }

    /// Build the search form.
    pub fn build(self) -> Result<BookingSearch, BuildError> {
        self.config.validate()?;
        let on_search = self.on_search.ok_or(BuildError::MissingSearchCallback)?;

        let mut locations = LocationCombobox::new(self.locations);
        if let Some(id) = self.default_location {
            if !locations.set_selected(Some(&id)) {
                return Err(BuildError::UnknownDefaultLocation(id));
            }
        }

        let dates = DateRangePickerBuilder::new()
            .config(&self.config)
            .availability(self.availability)
            .committed(self.default_dates)
            .build()?;

        let guests = GuestSelector::new(
            self.default_guests
                .unwrap_or_else(|| self.config.default_guests()),
            self.config.guest_limits(),
        );

        Ok(BookingSearch {
            locations,
            dates,
            guests,
            translations: self.config.translations,
            mobile_breakpoint: self.config.mobile_breakpoint,
            on_search,
        })
    }
}

impl Default for BookingSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_search_callback() {
        let result = BookingSearchBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingSearchCallback)));
    }

    #[test]
    fn unknown_default_location_is_rejected() {
        let result = BookingSearchBuilder::new()
            .locations(vec![SearchLocation::new("1", "Roma")])
            .default_location("7")
            .on_search(|_| {})
            .build();

        assert!(matches!(result, Err(BuildError::UnknownDefaultLocation(id)) if id == "7"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SearchConfig {
            min_nights: 0,
            ..SearchConfig::default()
        };
        let result = BookingSearchBuilder::new()
            .config(config)
            .on_search(|_| {})
            .build();

        assert!(matches!(result, Err(BuildError::InvalidMinNights(0))));
    }

    #[test]
    fn defaults_come_from_config() {
        let config = SearchConfig {
            default_adults: 3,
            default_children: 1,
            min_nights: 2,
            ..SearchConfig::default()
        };
        let search = BookingSearchBuilder::new()
            .config(config)
            .on_search(|_| {})
            .build()
            .unwrap();

        assert_eq!(search.guests().committed(), GuestCount::new(3, 1));
        assert_eq!(search.dates().min_nights(), 2);
        assert!(search.locations().selected().is_none());
    }
}
