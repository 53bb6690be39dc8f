//! The composed search bar.

use crate::guests::GuestSelector;
use crate::location::LocationCombobox;
use crate::picker::DateRangePicker;
use crate::search::error::{MissingField, SearchError};
use crate::search::layout::Layout;
use crate::search::payload::BookingSearchPayload;
use crate::translations::Translations;
use std::fmt;
use tracing::{debug, info};

/// Called with the payload of every successful search.
pub type SearchCallback = Box<dyn FnMut(&BookingSearchPayload) + Send>;

/// Destination, dates and guests composed into one search bar.
///
/// Built with [`BookingSearchBuilder`](crate::builder::BookingSearchBuilder).
pub struct BookingSearch {
    pub(crate) locations: LocationCombobox,
    pub(crate) dates: DateRangePicker,
    pub(crate) guests: GuestSelector,
    pub(crate) translations: Translations,
    pub(crate) mobile_breakpoint: u32,
    pub(crate) on_search: SearchCallback,
}

impl BookingSearch {
    pub fn locations(&self) -> &LocationCombobox {
        &self.locations
    }

    pub fn locations_mut(&mut self) -> &mut LocationCombobox {
        &mut self.locations
    }

    pub fn dates(&self) -> &DateRangePicker {
        &self.dates
    }

    pub fn dates_mut(&mut self) -> &mut DateRangePicker {
        &mut self.dates
    }

    pub fn guests(&self) -> &GuestSelector {
        &self.guests
    }

    pub fn guests_mut(&mut self) -> &mut GuestSelector {
        &mut self.guests
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    fn missing_fields(&self) -> Vec<MissingField> {
        let committed = self.dates.committed();
        let mut missing = Vec::new();
        if self.locations.selected().is_none() {
            missing.push(MissingField::Location);
        }
        if committed.from.is_none() {
            missing.push(MissingField::CheckIn);
        }
        if committed.to.is_none() {
            missing.push(MissingField::CheckOut);
        }
        missing
    }

    /// A location and both dates are required.
    pub fn is_search_enabled(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Payload built from the committed values, whether complete or not.
    pub fn payload(&self) -> BookingSearchPayload {
        let range = self.dates.committed();
        let guests = self.guests.committed();
        BookingSearchPayload {
            location: self.locations.selected().cloned(),
            check_in: range.from,
            check_out: range.to,
            adults: guests.adults,
            children: guests.children,
        }
    }

    /// Emit the payload to the search callback.
    ///
    /// Nothing is emitted while a required field is missing.
    pub fn search(&mut self) -> Result<BookingSearchPayload, SearchError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            debug!(missing = missing.len(), "search refused");
            return Err(SearchError::Incomplete(missing));
        }

        let payload = self.payload();
        info!(
            location = payload.location.as_ref().map(|l| l.id.as_str()),
            nights = payload.nights(),
            adults = payload.adults,
            children = payload.children,
            "search submitted"
        );
        (self.on_search)(&payload);
        Ok(payload)
    }

    pub fn layout(&self, viewport_width: u32) -> Layout {
        Layout::for_width(viewport_width, self.mobile_breakpoint)
    }

    /// Second line of the mobile trigger: `"Roma • 3 guests"`.
    pub fn mobile_summary(&self) -> String {
        let place = self
            .locations
            .selected()
            .map_or(self.translations.destination.as_str(), |l| l.name.as_str());
        let guests = self.translations.guests_label(self.guests.committed().total());
        format!("{place} • {guests}")
    }
}

impl fmt::Debug for BookingSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingSearch")
            .field("locations", &self.locations)
            .field("dates", &self.dates)
            .field("guests", &self.guests)
            .field("mobile_breakpoint", &self.mobile_breakpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BookingSearchBuilder;
    use crate::calendar::DateRange;
    use crate::guests::{GuestCount, GuestKind};
    use crate::location::SearchLocation;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn cities() -> Vec<SearchLocation> {
        vec![
            SearchLocation::new("1", "Roma, Italia"),
            SearchLocation::new("2", "Firenze, Italia"),
        ]
    }

    fn recording_search() -> (BookingSearch, Arc<Mutex<Vec<BookingSearchPayload>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let search = BookingSearchBuilder::new()
            .locations(cities())
            .on_search(move |p| sink.lock().unwrap().push(p.clone()))
            .build()
            .unwrap();
        (search, seen)
    }

    #[test]
    fn search_disabled_without_location() {
        let (mut search, seen) = recording_search();
        search.dates_mut().set_committed(DateRange::new(day(5), day(8)));

        assert!(!search.is_search_enabled());
        assert_eq!(
            search.search(),
            Err(SearchError::Incomplete(vec![MissingField::Location]))
        );
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn search_disabled_without_dates() {
        let (mut search, _) = recording_search();
        search.locations_mut().select("1");

        assert_eq!(
            search.search(),
            Err(SearchError::Incomplete(vec![
                MissingField::CheckIn,
                MissingField::CheckOut
            ]))
        );
    }

    #[test]
    fn search_emits_committed_values() {
        let (mut search, seen) = recording_search();
        search.locations_mut().select("2");

        let dates = search.dates_mut();
        dates.open();
        dates.click(day(5));
        dates.click(day(8));
        dates.confirm().unwrap();

        let guests = search.guests_mut();
        guests.open();
        guests.increment(GuestKind::Children);
        guests.confirm();

        let payload = search.search().unwrap();
        assert_eq!(payload.location.as_ref().map(|l| l.id.as_str()), Some("2"));
        assert_eq!(payload.check_in, Some(day(5)));
        assert_eq!(payload.check_out, Some(day(8)));
        assert_eq!((payload.adults, payload.children), (2, 1));
        assert_eq!(*seen.lock().unwrap(), vec![payload]);
    }

    #[test]
    fn unconfirmed_dates_do_not_enable_search() {
        let (mut search, _) = recording_search();
        search.locations_mut().select("1");

        let dates = search.dates_mut();
        dates.open();
        dates.click(day(5));
        dates.click(day(8));

        assert!(!search.is_search_enabled());
    }

    #[test]
    fn mobile_summary_counts_guests() {
        let (mut search, _) = recording_search();
        assert_eq!(search.mobile_summary(), "Destination • 2 guests");

        search.locations_mut().select("1");
        search.guests_mut().set_committed(GuestCount::new(1, 0));
        assert_eq!(search.mobile_summary(), "Roma, Italia • 1 guest");
    }

    #[test]
    fn layout_switches_at_breakpoint() {
        let (search, _) = recording_search();
        assert_eq!(search.layout(500), Layout::Mobile);
        assert_eq!(search.layout(1024), Layout::Desktop);
    }
}
