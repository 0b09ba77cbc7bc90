// crates/citydb-core/src/model.rs

//! Data model shared by the search index and the card renderer.
//!
//! All tables are loaded once by the host and treated as read-only
//! snapshots afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The currency every mean price is expressed in.
pub const BASE_CURRENCY: &str = "EUR";

/// A city entry of the catalog.
///
/// Identity is the `city` name compared case-insensitively; the catalog is
/// assumed to hold each name once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    /// ISO 3166-1 alpha-2 code (e.g. "FR").
    pub country: String,
    pub country_name: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(rename = "bestSeason", default)]
    pub best_season: String,
}

impl CityRecord {
    /// Minimal constructor, mostly for tests and demos. Coordinates are zero
    /// and the best season is empty.
    pub fn new(city: &str, country: &str, country_name: &str) -> Self {
        Self {
            city: city.to_owned(),
            country: country.to_owned(),
            country_name: country_name.to_owned(),
            lat: 0.0,
            lng: 0.0,
            best_season: String::new(),
        }
    }

    pub fn with_coords(mut self, lat: f64, lng: f64) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    pub fn with_best_season(mut self, season: &str) -> Self {
        self.best_season = season.to_owned();
        self
    }

    /// Key used by the [`PriceTable`]: the lowercased city name.
    #[inline]
    pub fn price_key(&self) -> String {
        self.city.to_lowercase()
    }

    /// Case-insensitive identity check.
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.city.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Mean nightly price per city, in EUR.
///
/// Keys are lowercased city names. A key may map to `None` when the price
/// generator could not compute a mean for that city; such an entry is
/// present but unpriced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, Option<f64>>,
}

impl PriceTable {
    pub fn new(prices: HashMap<String, Option<f64>>) -> Self {
        Self { prices }
    }

    /// Looks up the entry for `city`, lowercasing the name first.
    ///
    /// - `None`: no entry, the price is not known yet.
    /// - `Some(None)`: entry present with a `null` price.
    /// - `Some(Some(p))`: mean price `p` in EUR.
    pub fn lookup(&self, city: &str) -> Option<Option<f64>> {
        self.prices.get(&city.to_lowercase()).copied()
    }

    pub fn insert(&mut self, city: &str, price: Option<f64>) {
        self.prices.insert(city.to_lowercase(), price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, Option<f64>)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

/// Rates the upstream feed does not publish, keyed by currency code.
///
/// Merged by [`ExchangeRateTable::with_fallbacks`] without overriding
/// fetched values.
pub const FALLBACK_RATES: &[(&str, f64)] = &[("ARS", 950.0), ("CLP", 980.0), ("TWD", 35.0)];

/// Multipliers from EUR into other currencies.
///
/// Constructors always insert `EUR -> 1.0` when the payload lacks it, so
/// the type is not `Deserialize`; parse payloads with
/// [`crate::loader::parse_rates`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExchangeRateTable {
    rates: HashMap<String, f64>,
    /// When the rates were fetched upstream (ISO 8601), if known.
    timestamp: Option<String>,
}

impl ExchangeRateTable {
    pub fn new(mut rates: HashMap<String, f64>) -> Self {
        rates.entry(BASE_CURRENCY.to_owned()).or_insert(1.0);
        Self {
            rates,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: Option<String>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Adds the [`FALLBACK_RATES`] for currencies that are missing.
    pub fn with_fallbacks(mut self) -> Self {
        for (code, rate) in FALLBACK_RATES {
            self.rates.entry((*code).to_owned()).or_insert(*rate);
        }
        self
    }

    /// Multiplier for `code`, if the table has one.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Multiplier for `code`, falling back to `1.0` for unknown codes.
    #[inline]
    pub fn rate_or_identity(&self, code: &str) -> f64 {
        self.rate(code).unwrap_or(1.0)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Sorted list of the currency codes in the table.
    pub fn currencies(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for ExchangeRateTable {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

/// Parameter bundle handed to the renderer.
///
/// A table that has not been loaded yet is `None`.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub prices: Option<&'a PriceTable>,
    pub rates: Option<&'a ExchangeRateTable>,
    pub currency: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        prices: Option<&'a PriceTable>,
        rates: Option<&'a ExchangeRateTable>,
        currency: &'a str,
    ) -> Self {
        Self {
            prices,
            rates,
            currency,
        }
    }
}

/// Simple aggregate statistics for a loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub countries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_table_always_has_eur() {
        let table = ExchangeRateTable::new(HashMap::from([("USD".to_owned(), 1.08)]));
        assert_eq!(table.rate("EUR"), Some(1.0));
        assert_eq!(table.rate("USD"), Some(1.08));
    }

    #[test]
    fn rate_table_keeps_explicit_eur() {
        let table = ExchangeRateTable::new(HashMap::from([("EUR".to_owned(), 1.0)]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn fallbacks_do_not_override_fetched_rates() {
        let table = ExchangeRateTable::new(HashMap::from([("ARS".to_owned(), 1000.0)]))
            .with_fallbacks();
        assert_eq!(table.rate("ARS"), Some(1000.0));
        assert_eq!(table.rate("CLP"), Some(980.0));
        assert_eq!(table.rate("TWD"), Some(35.0));
    }

    #[test]
    fn unknown_currency_uses_identity_rate() {
        let table = ExchangeRateTable::default();
        assert_eq!(table.rate_or_identity("XYZ"), 1.0);
    }

    #[test]
    fn price_lookup_is_case_insensitive_on_the_query() {
        let mut prices = PriceTable::default();
        prices.insert("Paris", Some(45.0));
        prices.insert("oslo", None);

        assert_eq!(prices.lookup("PARIS"), Some(Some(45.0)));
        assert_eq!(prices.lookup("Oslo"), Some(None));
        assert_eq!(prices.lookup("Atlantis"), None);
    }

    #[test]
    fn city_identity_ignores_case() {
        let city = CityRecord::new("Lisbon", "PT", "Portugal");
        assert!(city.is_named("lisbon"));
        assert!(city.is_named(" LISBON "));
        assert!(!city.is_named("Lisboa"));
    }

    #[test]
    fn catalog_entry_reads_camel_case_season() {
        let json = r#"{"city":"Rome","country":"IT","country_name":"Italy",
                       "lat":41.9,"lng":12.5,"bestSeason":"Spring","currency":"EUR"}"#;
        let city: CityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(city.best_season, "Spring");
        assert_eq!(city.lat, 41.9);
    }
}
