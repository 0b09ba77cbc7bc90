// crates/citydb-core/src/session.rs

//! Caller-side controller for a search-box + city-card page.
//!
//! A [`Session`] owns the catalog, the optional price and rate tables and
//! the selected currency, and passes them by reference into the pure
//! [`rank`](crate::search::rank) and
//! [`build_view_model`](crate::render::build_view_model) functions.
//! "Not loaded yet" is an absent table, there are no loaded flags.

use crate::model::{CityRecord, DbStats, ExchangeRateTable, PriceTable, RenderContext, BASE_CURRENCY};
use crate::render::{build_view_model, render_card_html, CityViewModel};
use crate::search::{SearchIndex, SearchOptions, SearchResult};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Session {
    index: SearchIndex,
    prices: Option<PriceTable>,
    rates: Option<ExchangeRateTable>,
    currency: String,
    options: SearchOptions,
}

impl Session {
    /// New session over `catalog`, currency `EUR`, no prices or rates yet.
    pub fn new(catalog: Vec<CityRecord>) -> Self {
        Self {
            index: SearchIndex::new(catalog),
            prices: None,
            rates: None,
            currency: BASE_CURRENCY.to_owned(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn stats(&self) -> DbStats {
        self.index.stats()
    }

    /// Replaces the catalog, e.g. once the late catalog fetch completes.
    pub fn set_catalog(&mut self, catalog: Vec<CityRecord>) {
        debug!(count = catalog.len(), "catalog set");
        self.index = SearchIndex::new(catalog);
    }

    pub fn set_prices(&mut self, prices: PriceTable) {
        debug!(count = prices.len(), "price table set");
        self.prices = Some(prices);
    }

    pub fn set_rates(&mut self, rates: ExchangeRateTable) {
        debug!(count = rates.len(), "exchange rates set");
        self.rates = Some(rates);
    }

    pub fn prices(&self) -> Option<&PriceTable> {
        self.prices.as_ref()
    }

    pub fn rates(&self) -> Option<&ExchangeRateTable> {
        self.rates.as_ref()
    }

    /// Selects the display currency. Codes are kept as given; an unknown
    /// code converts at rate 1.0 and displays as `"<code> "`.
    pub fn set_currency(&mut self, code: &str) {
        self.currency = code.trim().to_owned();
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// True once both the price and the rate tables are present.
    pub fn is_ready(&self) -> bool {
        self.prices.is_some() && self.rates.is_some()
    }

    /// Suggestions for the current input value.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        self.index.rank_with(query, &self.options)
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext::new(self.prices.as_ref(), self.rates.as_ref(), &self.currency)
    }

    /// View model for a city record.
    pub fn card(&self, city: &CityRecord) -> CityViewModel {
        build_view_model(city, &self.context())
    }

    /// View model for a picked suggestion: accepts the suggestion label
    /// (`"City, Country"`) or a bare city name.
    pub fn select(&self, label_or_name: &str) -> Option<CityViewModel> {
        self.index.find_by_label(label_or_name).map(|c| self.card(c))
    }

    /// Markup for a picked suggestion, see [`Session::select`].
    pub fn select_html(&self, label_or_name: &str) -> Option<String> {
        self.select(label_or_name).map(|vm| render_card_html(&vm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn session() -> Session {
        Session::new(vec![
            CityRecord::new("Paris", "FR", "France").with_best_season("Spring"),
            CityRecord::new("Perth", "AU", "Australia"),
        ])
    }

    #[test]
    fn starts_in_eur_and_not_ready() {
        let s = session();
        assert_eq!(s.currency(), "EUR");
        assert!(!s.is_ready());
        let vm = s.select("Paris").unwrap();
        assert!(!vm.price_ready());
    }

    #[test]
    fn select_after_tables_load() {
        let mut s = session();
        s.set_prices([("paris".to_owned(), Some(85.0))].into_iter().collect());
        s.set_rates(ExchangeRateTable::new(HashMap::from([("GBP".to_owned(), 0.85)])));
        s.set_currency("GBP");

        assert!(s.is_ready());
        let vm = s.select("Paris, France").unwrap();
        assert_eq!(vm.price.text(), Some("£72.25"));
        assert_eq!(vm.stars, 5);
        assert!(s.select_html("paris").unwrap().contains("£72.25"));
    }

    #[test]
    fn unknown_selection_is_none() {
        assert!(session().select("Atlantis").is_none());
    }

    #[test]
    fn search_uses_session_options() {
        let s = session().with_options(SearchOptions {
            limit: 1,
            ..SearchOptions::default()
        });
        // "p" prefixes both cities.
        assert_eq!(s.search("p").len(), 1);
    }
}
