//! Property-based tests for range selection.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use booking_search::builder::DateRangePickerBuilder;
use booking_search::calendar::{AvailabilityEntry, AvailabilityIndex, DateRange};
use booking_search::core::SelectionState;
use booking_search::guests::{GuestCount, GuestKind, GuestLimits, GuestSelector};
use booking_search::picker::{disabled_dates, next_range, ClickOutcome, DateRangePicker};
use booking_search::policy::StayPolicy;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

prop_compose! {
    fn arbitrary_date()(offset in 0u64..120) -> NaiveDate {
        base() + Days::new(offset)
    }
}

prop_compose! {
    fn ordered_pair()(a in 0u64..100, gap in 1u64..20) -> (NaiveDate, NaiveDate) {
        (base() + Days::new(a), base() + Days::new(a + gap))
    }
}

fn season() -> AvailabilityIndex {
    (0..150)
        .map(|d| AvailabilityEntry::available(base() + Days::new(d), 80.0))
        .collect()
}

fn open_picker(min_nights: u32) -> DateRangePicker {
    let availability = season();
    let mut picker = DateRangePickerBuilder::new()
        .availability(availability)
        .min_nights(min_nights)
        .build()
        .unwrap();
    picker.open();
    picker
}

proptest! {
    #[test]
    fn click_order_does_not_matter((a, b) in ordered_pair()) {
        let mut forward = open_picker(1);
        forward.click(a);
        forward.click(b);

        let mut backward = open_picker(1);
        backward.click(b);
        backward.click(a);

        prop_assert_eq!(forward.confirm().unwrap(), DateRange::new(a, b));
        prop_assert_eq!(backward.confirm().unwrap(), DateRange::new(a, b));
    }

    #[test]
    fn confirmed_ranges_always_have_nights(
        min_nights in 1u32..6,
        clicks in prop::collection::vec(arbitrary_date(), 0..8)
    ) {
        let mut picker = open_picker(min_nights);
        for date in clicks {
            picker.click(date);
        }

        if let Ok(range) = picker.confirm() {
            let nights = range.nights().unwrap();
            prop_assert!(nights >= i64::from(min_nights));
        }
    }

    #[test]
    fn short_stays_keep_partial_start(min_nights in 2u32..8, start in arbitrary_date(), gap in 0u64..8) {
        prop_assume!(gap < u64::from(min_nights));
        let partial = DateRange::starting(start);
        let outcome = next_range(&partial, start + Days::new(gap), &StayPolicy::with_min_nights(min_nights));

        let rejected = matches!(outcome, ClickOutcome::Rejected { .. });
        prop_assert!(rejected);
        prop_assert_eq!(outcome.range(), None);
    }

    #[test]
    fn long_enough_stays_complete(min_nights in 1u32..8, start in arbitrary_date(), extra in 0u64..10) {
        let checkout = start + Days::new(u64::from(min_nights) + extra);
        let outcome = next_range(&DateRange::starting(start), checkout, &StayPolicy::with_min_nights(min_nights));

        prop_assert_eq!(outcome, ClickOutcome::Completed(DateRange::new(start, checkout)));
    }

    #[test]
    fn window_is_disabled_while_choosing_checkout(min_nights in 1u32..8, start in arbitrary_date()) {
        let disabled = disabled_dates(&season(), &DateRange::starting(start), min_nights);

        prop_assert_eq!(disabled.len(), (min_nights - 1) as usize);
        prop_assert!(!disabled.contains(&start));
        prop_assert!(!disabled.contains(&(start + Days::new(u64::from(min_nights)))));
    }

    #[test]
    fn window_never_extends_past_index(min_nights in 1u32..=u32::MAX, start in arbitrary_date()) {
        let index = season();
        let disabled = disabled_dates(&index, &DateRange::starting(start), min_nights);

        prop_assert!(disabled.len() < index.len());
        if let Some(last) = disabled.last() {
            prop_assert!(*last <= index.last_date().unwrap());
        }
    }

    #[test]
    fn unavailable_days_are_always_disabled(
        flags in prop::collection::vec(any::<bool>(), 1..30),
        provisional in prop::option::of(ordered_pair())
    ) {
        let index: AvailabilityIndex = flags
            .iter()
            .enumerate()
            .map(|(i, &available)| AvailabilityEntry {
                date: base() + Days::new(i as u64),
                price: 50.0,
                is_available: available,
            })
            .collect();
        let range = provisional.map_or_else(DateRange::empty, |(a, b)| DateRange::new(a, b));
        let disabled = disabled_dates(&index, &range, 3);

        for (i, &available) in flags.iter().enumerate() {
            let date = base() + Days::new(i as u64);
            prop_assert_eq!(disabled.contains(&date), !available);
        }
    }

    #[test]
    fn guests_stay_within_limits(
        max_adults in 1u32..10,
        max_children in 0u32..6,
        steps in prop::collection::vec((any::<bool>(), -3i64..4), 0..30)
    ) {
        let limits = GuestLimits { max_adults, max_children };
        let mut selector = GuestSelector::new(GuestCount::default(), limits);
        selector.open();

        for (adults, delta) in steps {
            let kind = if adults { GuestKind::Adults } else { GuestKind::Children };
            selector.step(kind, delta);
        }

        let count = selector.confirm().unwrap();
        prop_assert!((1..=max_adults).contains(&count.adults));
        prop_assert!(count.children <= max_children);
    }

    #[test]
    fn history_path_starts_from_open_state(clicks in prop::collection::vec(arbitrary_date(), 1..8)) {
        let mut picker = open_picker(2);
        for date in &clicks {
            picker.click(*date);
        }

        let history = picker.history().unwrap();
        prop_assert_eq!(history.clicks().len(), clicks.len());

        let path = history.get_path();
        prop_assert_eq!(path[0], SelectionState::Empty);
        prop_assert_eq!(*path.last().unwrap(), picker.state());
        for pair in path.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn state_roundtrip_serialization(a in arbitrary_date(), complete in any::<bool>()) {
        let range = if complete {
            DateRange::new(a, a + Days::new(2))
        } else {
            DateRange::starting(a)
        };
        let state = SelectionState::of(&range);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SelectionState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
