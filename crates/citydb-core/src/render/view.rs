// crates/citydb-core/src/render/view.rs
use super::currency::{currency_symbol, format_price};
use super::rating::price_to_stars;
use crate::model::{CityRecord, RenderContext};
use crate::text::encode_uri_component;
use serde::Serialize;

const FLAG_CDN: &str = "https://flagcdn.com/48x36";
const MAPS_PLACE: &str = "https://www.google.com/maps/place";
const PREDICT_PAGE: &str = "/predict.html";

/// Shown when a city has no best-season text.
pub const NO_SEASON: &str = "N/A";

/// Price part of a city card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PriceDisplay {
    /// No price (or no rate table) yet; the UI shows a spinner.
    Loading,
    /// Converted price ready for display.
    Ready {
        /// Converted amount, rounded to 2 decimals.
        amount: f64,
        symbol: String,
        /// `symbol` + amount with 2 decimals, e.g. `"$54.00"`.
        text: String,
    },
}

impl PriceDisplay {
    pub fn is_ready(&self) -> bool {
        matches!(self, PriceDisplay::Ready { .. })
    }

    /// Display text, or `None` while loading.
    pub fn text(&self) -> Option<&str> {
        match self {
            PriceDisplay::Ready { text, .. } => Some(text),
            PriceDisplay::Loading => None,
        }
    }
}

/// Presentation-ready data for one city card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityViewModel {
    pub city: String,
    pub country_code: String,
    pub country_name: String,
    pub flag_url: String,
    /// Google Maps link; the city name is inserted as-is.
    pub maps_url: String,
    pub best_season: String,
    pub price: PriceDisplay,
    /// 0 means "no rating", 1..=5 is the expensiveness.
    pub stars: u8,
    /// Link to the price predictor, city name percent-encoded.
    pub predict_url: String,
}

impl CityViewModel {
    #[inline]
    pub fn price_ready(&self) -> bool {
        self.price.is_ready()
    }
}

/// Builds the card view model for `city`.
///
/// Deterministic and side-effect free. Missing data never fails:
/// - no price table, no rate table, or no entry for the city gives
///   [`PriceDisplay::Loading`] and 0 stars;
/// - a `null` entry prices the city at 0 with 0 stars;
/// - a currency missing from the rate table converts with rate `1.0`.
///
/// ```rust
/// use citydb_core::prelude::*;
/// use std::collections::HashMap;
///
/// let city = CityRecord::new("Lyon", "FR", "France");
/// let prices: PriceTable = [("lyon".to_owned(), Some(50.0))].into_iter().collect();
/// let rates = ExchangeRateTable::new(HashMap::from([("USD".to_owned(), 1.08)]));
///
/// let vm = build_view_model(&city, &RenderContext::new(Some(&prices), Some(&rates), "USD"));
/// assert_eq!(vm.price.text(), Some("$54.00"));
/// assert_eq!(vm.stars, 3);
/// ```
pub fn build_view_model(city: &CityRecord, ctx: &RenderContext<'_>) -> CityViewModel {
    let entry = ctx.prices.and_then(|prices| prices.lookup(&city.city));

    let (price, stars) = match (entry, ctx.rates) {
        (Some(mean), Some(rates)) => {
            let rate = rates.rate_or_identity(ctx.currency);
            // Ties round up, so `text` always agrees with `amount`.
            let amount = round2(mean.unwrap_or(0.0) * rate);
            let symbol = currency_symbol(ctx.currency);
            let text = format_price(&symbol, amount);
            let price = PriceDisplay::Ready {
                amount,
                symbol,
                text,
            };
            (price, price_to_stars(mean))
        }
        _ => (PriceDisplay::Loading, 0),
    };

    let best_season = if city.best_season.is_empty() {
        NO_SEASON.to_owned()
    } else {
        city.best_season.clone()
    };

    CityViewModel {
        city: city.city.clone(),
        country_code: city.country.clone(),
        country_name: city.country_name.clone(),
        flag_url: format!("{FLAG_CDN}/{}.png", city.country.to_lowercase()),
        maps_url: format!("{MAPS_PLACE}/{}", city.city),
        best_season,
        price,
        stars,
        predict_url: format!("{PREDICT_PAGE}?city={}", encode_uri_component(&city.city)),
    }
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
