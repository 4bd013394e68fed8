//! Search filters and query URL construction
//!
//! Filters are an opaque name → value mapping; the provider defines which
//! names and values are meaningful, so nothing here validates them.

use std::collections::BTreeMap;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::SEARCH_BASE_URL;
use crate::error::{ConfigError, Result};

/// Maximum page size the provider accepts for `maxItems`.
pub const MAX_ITEMS_CEILING: u32 = 50;

/// Search filters keyed by the provider's parameter names.
///
/// Backed by a `BTreeMap` so the generated query string is deterministic.
///
/// # Example
/// ```
/// use casafind::client::SearchFilters;
///
/// let filters = SearchFilters::new()
///     .country("es")
///     .operation("rent")
///     .property_type("homes")
///     .max_price(3000);
/// assert_eq!(filters.get("maxPrice"), Some("3000"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchFilters(BTreeMap<String, String>);

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary filter, replacing any previous value for `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(mut self, other: &SearchFilters) -> Self {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
        self
    }

    pub fn country(self, country: impl ToString) -> Self {
        self.set("country", country)
    }

    pub fn locale(self, locale: impl ToString) -> Self {
        self.set("locale", locale)
    }

    pub fn language(self, language: impl ToString) -> Self {
        self.set("language", language)
    }

    /// `sale` or `rent`
    pub fn operation(self, operation: impl ToString) -> Self {
        self.set("operation", operation)
    }

    /// `homes`, `offices`, `premises`, `garages` or `bedrooms`
    pub fn property_type(self, property_type: impl ToString) -> Self {
        self.set("propertyType", property_type)
    }

    pub fn max_price(self, price: impl ToString) -> Self {
        self.set("maxPrice", price)
    }

    pub fn min_price(self, price: impl ToString) -> Self {
        self.set("minPrice", price)
    }

    pub fn sort(self, sort: impl ToString) -> Self {
        self.set("sort", sort)
    }

    pub fn since_date(self, since: impl ToString) -> Self {
        self.set("sinceDate", since)
    }

    /// Search centre as `lat,lon`.
    pub fn center(self, lat: f64, lon: f64) -> Self {
        self.set("center", format!("{},{}", lat, lon))
    }

    /// Radius around `center`, in metres.
    pub fn distance(self, metres: u32) -> Self {
        self.set("distance", metres)
    }

    pub fn max_items(self, items: u32) -> Self {
        self.set("maxItems", items)
    }
}

impl FromIterator<(String, String)> for SearchFilters {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Build the search URL against the default endpoint.
pub fn build_search_url(filters: &SearchFilters) -> Result<String> {
    let base = Url::parse(SEARCH_BASE_URL)
        .map_err(|e| ConfigError::Invalid(format!("search endpoint '{}': {}", SEARCH_BASE_URL, e)))?;
    Ok(build_search_url_with_base(&base, filters))
}

/// Build the search URL against `base`.
///
/// Keys and values are form-urlencoded. An empty filter set yields `base`
/// unchanged, without a trailing `?`.
pub fn build_search_url_with_base(base: &Url, filters: &SearchFilters) -> String {
    if filters.is_empty() {
        return base.to_string();
    }

    let mut url = base.clone();
    url.query_pairs_mut().extend_pairs(filters.iter());
    url.to_string()
}
