//! Destination lookup.

use crate::translations::Translations;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Called with the new selection (or `None` when cleared).
pub type LocationCallback = Box<dyn FnMut(Option<&SearchLocation>) + Send>;

/// A place the user can search for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchLocation {
    pub id: String,
    pub name: String,
    /// City, hotel, region...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// ISO country code
    #[serde(
        rename = "countryCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub country_code: Option<String>,
}

impl SearchLocation {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: None,
            country_code: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Case-insensitive substring match on the name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A fixed list of locations with at most one selected.
pub struct LocationCombobox {
    locations: Vec<SearchLocation>,
    selected: Option<SearchLocation>,
    disabled: bool,
    on_change: Option<LocationCallback>,
}

impl LocationCombobox {
    pub fn new(locations: Vec<SearchLocation>) -> Self {
        Self {
            locations,
            selected: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn with_on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<&SearchLocation>) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn locations(&self) -> &[SearchLocation] {
        &self.locations
    }

    pub fn find(&self, id: &str) -> Option<&SearchLocation> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Locations whose name contains `query`, in list order.
    pub fn filter(&self, query: &str) -> Vec<&SearchLocation> {
        self.locations.iter().filter(|l| l.matches(query)).collect()
    }

    /// Message shown when `query` matches nothing.
    pub fn empty_message<'t>(&self, query: &str, translations: &'t Translations) -> Option<&'t str> {
        self.filter(query)
            .is_empty()
            .then_some(translations.no_location_found.as_str())
    }

    pub fn selected(&self) -> Option<&SearchLocation> {
        self.selected.as_ref()
    }

    /// Select a location by id; selecting the current one clears it.
    ///
    /// Returns `false` for unknown ids or while disabled.
    pub fn select(&mut self, id: &str) -> bool {
        if self.disabled {
            return false;
        }
        let Some(location) = self.find(id).cloned() else {
            debug!(id, "unknown location ignored");
            return false;
        };

        let clearing = self.selected.as_ref().is_some_and(|s| s.id == location.id);
        self.selected = if clearing { None } else { Some(location) };
        debug!(id, cleared = clearing, "location selection changed");

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.selected.as_ref());
        }
        true
    }

    /// Set the selection without firing the callback.
    ///
    /// Returns `false` for unknown ids.
    pub fn set_selected(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.selected = None;
                true
            }
            Some(id) => match self.find(id).cloned() {
                Some(location) => {
                    self.selected = Some(location);
                    true
                }
                None => false,
            },
        }
    }

    /// Selected name, or the placeholder.
    pub fn trigger_label(&self, translations: &Translations) -> String {
        self.selected
            .as_ref()
            .map_or_else(|| translations.where_to_go.clone(), |l| l.name.clone())
    }
}

impl fmt::Debug for LocationCombobox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationCombobox")
            .field("locations", &self.locations.len())
            .field("selected", &self.selected)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn cities() -> Vec<SearchLocation> {
        vec![
            SearchLocation::new("1", "Roma, Italia").with_kind("Città"),
            SearchLocation::new("2", "Firenze, Italia").with_kind("Città"),
            SearchLocation::new("3", "Venezia, Italia").with_country_code("IT"),
        ]
    }

    #[test]
    fn filter_is_case_insensitive() {
        let combo = LocationCombobox::new(cities());

        let hits: Vec<_> = combo.filter("ROMA").into_iter().map(|l| l.id.as_str()).collect();
        assert_eq!(hits, vec!["1"]);
    }

    #[test]
    fn empty_query_lists_everything() {
        let combo = LocationCombobox::new(cities());
        assert_eq!(combo.filter("  ").len(), 3);
    }

    #[test]
    fn empty_message_only_without_matches() {
        let combo = LocationCombobox::new(cities());
        let t = Translations::default();

        assert_eq!(combo.empty_message("xyz", &t), Some("No location found."));
        assert_eq!(combo.empty_message("ven", &t), None);
    }

    #[test]
    fn selecting_twice_toggles_off() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut combo = LocationCombobox::new(cities())
            .with_on_change(move |l| sink.lock().unwrap().push(l.map(|l| l.id.clone())));

        assert!(combo.select("2"));
        assert_eq!(combo.selected().map(|l| l.name.as_str()), Some("Firenze, Italia"));
        assert!(combo.select("2"));
        assert!(combo.selected().is_none());

        assert_eq!(*seen.lock().unwrap(), vec![Some("2".to_string()), None]);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut combo = LocationCombobox::new(cities());
        assert!(!combo.select("99"));
        assert!(combo.selected().is_none());
    }

    #[test]
    fn trigger_label_uses_placeholder() {
        let mut combo = LocationCombobox::new(cities());
        let t = Translations::default();

        assert_eq!(combo.trigger_label(&t), "Where do you want to go?");
        combo.set_selected(Some("3"));
        assert_eq!(combo.trigger_label(&t), "Venezia, Italia");
    }

    #[test]
    fn location_uses_widget_json_keys() {
        let json = r#"{"id":"1","name":"Roma","type":"city","countryCode":"IT"}"#;
        let location: SearchLocation = serde_json::from_str(json).unwrap();

        assert_eq!(location.kind.as_deref(), Some("city"));
        assert_eq!(location.country_code.as_deref(), Some("IT"));
        assert_eq!(serde_json::to_string(&location).unwrap(), json);
    }
}
