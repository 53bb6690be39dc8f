//! Builder for constructing date-range pickers.

use crate::builder::error::BuildError;
use crate::calendar::{AvailabilityIndex, DateRange};
use crate::config::SearchConfig;
use crate::core::Guard;
use crate::picker::{DateRangePicker, PickerCallbacks};
use crate::policy::{StayPolicy, StayPolicyBuilder};
use crate::translations::Translations;
use chrono::NaiveDate;

/// Builder for constructing pickers with a fluent API.
pub struct DateRangePickerBuilder {
    availability: AvailabilityIndex,
    min_nights: u32,
    policy: Option<StayPolicy>,
    selectable: Option<Guard<NaiveDate>>,
    committed: DateRange,
    disabled: bool,
    translations: Translations,
    currency_symbol: String,
    callbacks: PickerCallbacks,
}

impl DateRangePickerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            availability: AvailabilityIndex::default(),
            min_nights: 1,
            policy: None,
            selectable: None,
            committed: DateRange::empty(),
            disabled: false,
            translations: Translations::default(),
            currency_symbol: "€".to_string(),
            callbacks: PickerCallbacks::default(),
        }
    }

    /// Take minimum nights, strings and currency from a configuration.
    pub fn config(mut self, config: &SearchConfig) -> Self {
        self.min_nights = config.min_nights;
        self.translations = config.translations.clone();
        self.currency_symbol = config.currency_symbol.clone();
        self
    }

    pub fn availability(mut self, availability: AvailabilityIndex) -> Self {
        self.availability = availability;
        self
    }

    /// Minimum nights (default 1). Ignored when a full policy is given.
    pub fn min_nights(mut self, n: u32) -> Self {
        self.min_nights = n;
        self
    }

    /// Use a complete stay policy instead of a bare minimum.
    pub fn policy(mut self, policy: StayPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Only days the predicate accepts can be clicked.
    pub fn selectable_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&NaiveDate) -> bool + Send + Sync + 'static,
    {
        self.selectable = Some(Guard::new(predicate));
        self
    }

    /// Initially committed range.
    pub fn committed(mut self, range: DateRange) -> Self {
        self.committed = range;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }

    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Called once per confirmed session with the new range.
    pub fn on_confirm<F>(mut self, callback: F) -> Self
    where
        F: FnMut(DateRange) + Send + 'static,
    {
        self.callbacks.on_confirm = Some(Box::new(callback));
        self
    }

    /// Called once per cancelled session.
    pub fn on_cancel<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.callbacks.on_cancel = Some(Box::new(callback));
        self
    }

    /// Build the picker.
    pub fn build(self) -> Result<DateRangePicker, BuildError> {
        let policy = match self.policy {
            Some(policy) => policy,
            None => StayPolicyBuilder::new().min_nights(self.min_nights).build()?,
        };

        let mut picker = DateRangePicker {
            availability: self.availability,
            policy,
            selectable: self.selectable,
            committed: DateRange::empty(),
            session: None,
            disabled: self.disabled,
            translations: self.translations,
            currency_symbol: self.currency_symbol,
            callbacks: self.callbacks,
        };
        picker.set_committed(self.committed);
        Ok(picker)
    }
}

impl Default for DateRangePickerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
