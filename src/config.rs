//! Search configuration.
//!
//! Every field has a default, so a configuration file only needs the values
//! it changes.

use crate::builder::BuildError;
use crate::guests::{GuestCount, GuestLimits, MIN_ADULTS};
use crate::translations::Translations;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] BuildError),
}

/// Tunables of a booking search.
///
/// # Example
///
/// ```rust
/// use booking_search::config::SearchConfig;
///
/// let config = SearchConfig::from_json(r#"{
///     "minNights": 2,
///     "translations": { "search": "Cerca" }
/// }"#).unwrap();
///
/// assert_eq!(config.min_nights, 2);
/// assert_eq!(config.max_adults, 30);
/// assert_eq!(config.translations.search, "Cerca");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub min_nights: u32,
    pub max_adults: u32,
    pub max_children: u32,
    pub default_adults: u32,
    pub default_children: u32,
    /// Viewport width (px) below which the mobile layout is used
    pub mobile_breakpoint: u32,
    pub currency_symbol: String,
    pub translations: Translations,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_nights: 1,
            max_adults: 30,
            max_children: 10,
            default_adults: 2,
            default_children: 0,
            mobile_breakpoint: 768,
            currency_symbol: "€".to_string(),
            translations: Translations::default(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.min_nights == 0 {
            return Err(BuildError::InvalidMinNights(self.min_nights));
        }
        if self.max_adults < MIN_ADULTS {
            return Err(BuildError::InvalidMaxAdults(self.max_adults));
        }
        if !(MIN_ADULTS..=self.max_adults).contains(&self.default_adults) {
            return Err(BuildError::DefaultOutOfRange {
                field: "adults",
                value: self.default_adults,
                min: MIN_ADULTS,
                max: self.max_adults,
            });
        }
        if self.default_children > self.max_children {
            return Err(BuildError::DefaultOutOfRange {
                field: "children",
                value: self.default_children,
                min: 0,
                max: self.max_children,
            });
        }
        Ok(())
    }

    pub fn guest_limits(&self) -> GuestLimits {
        GuestLimits {
            max_adults: self.max_adults,
            max_children: self.max_children,
        }
    }

    pub fn default_guests(&self) -> GuestCount {
        GuestCount::new(self.default_adults, self.default_children)
    }
}
