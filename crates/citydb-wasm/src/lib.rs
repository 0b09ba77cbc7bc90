//! citydb-wasm: WebAssembly bindings for citydb-core
//!
//! This crate exposes the city search box and the city card renderer to
//! JavaScript. The page keeps fetching its data as before and hands the
//! decoded JSON to a [`CityFinder`], which replaces the module-level
//! globals (catalog, loaded flags, selected currency) of a hand-written
//! script.
//!
//! What it provides
//! ----------------
//! - `CityFinder`: `new(catalog)`, `setPrices`, `setRates`, `setCurrency`,
//!   `search(query)`, `viewModel(label)`, `renderHtml(label)`, `isReady()`
//! - Free helpers: `rank_cities(query, catalog)`, `currency_symbol(code)`,
//!   `price_to_stars(price)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CityFinder } from 'citydb-wasm';
//!
//! async function main() {
//!   await init();
//!   const finder = new CityFinder(await (await fetch('/static/js/cities.json')).json());
//!   fetch('/average-prices').then(r => r.json()).then(p => finder.setPrices(p));
//!   fetch('/exchange-rates').then(r => r.json()).then(r => finder.setRates(r));
//!
//!   input.addEventListener('input', () => {
//!     resultsBox.innerHTML = '';
//!     for (const hit of finder.search(input.value)) {
//!       // hit = { label, score, city }
//!     }
//!   });
//!   // on click: display.innerHTML = finder.renderHtml(hit.label);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Every method is synchronous; nothing here touches the network or DOM.
//! - Until both `setPrices` and `setRates` have been called, cards render
//!   the loading placeholder instead of a price.
use citydb_core::loader::{catalog_from_value, prices_from_value, rates_from_value};
use citydb_core::render::render_card_html;
use citydb_core::{CityRecord, MatchMode, SearchOptions, Session};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing CityDB WASM module...");
}

fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn from_js(value: JsValue) -> Result<serde_json::Value, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(js_err)
}

/// One suggestion as seen from JS.
#[derive(Serialize)]
struct Hit<'a> {
    label: String,
    score: i8,
    city: &'a CityRecord,
}

fn hits_to_js(hits: Vec<citydb_core::SearchResult<'_>>) -> Result<JsValue, JsError> {
    let out: Vec<Hit<'_>> = hits
        .into_iter()
        .map(|h| Hit {
            label: h.label(),
            score: h.score,
            city: h.city,
        })
        .collect();
    to_value(&out).map_err(js_err)
}

/* --------------------------------------------------------------------------
   Stateful controller
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct CityFinder {
    session: Session,
}

#[wasm_bindgen]
impl CityFinder {
    /// Builds a finder from the decoded `cities.json` array.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue) -> Result<CityFinder, JsError> {
        let cities = catalog_from_value(from_js(catalog)?).map_err(js_err)?;
        log(&format!("✓ Loaded {} cities", cities.len()));
        Ok(CityFinder {
            session: Session::new(cities),
        })
    }

    /// Switches to accent-insensitive matching ("zurich" finds "Zürich").
    #[wasm_bindgen(js_name = setFolded)]
    pub fn set_folded(&mut self, folded: bool) {
        let mode = if folded {
            MatchMode::Folded
        } else {
            MatchMode::Lowercase
        };
        self.session.set_options(SearchOptions {
            mode,
            ..SearchOptions::default()
        });
    }

    /// `/average-prices` response (bare map) or the cache file shape.
    #[wasm_bindgen(js_name = setPrices)]
    pub fn set_prices(&mut self, payload: JsValue) -> Result<(), JsError> {
        let prices = prices_from_value(from_js(payload)?).map_err(js_err)?;
        log(&format!("✓ Loaded {} average prices", prices.len()));
        self.session.set_prices(prices);
        Ok(())
    }

    /// `/exchange-rates` response: `{ rates: { USD: 1.08, ... } }`.
    #[wasm_bindgen(js_name = setRates)]
    pub fn set_rates(&mut self, payload: JsValue) -> Result<(), JsError> {
        let rates = rates_from_value(from_js(payload)?).map_err(js_err)?;
        log(&format!("✓ Loaded {} exchange rates", rates.len()));
        self.session.set_rates(rates);
        Ok(())
    }

    #[wasm_bindgen(js_name = setCurrency)]
    pub fn set_currency(&mut self, code: &str) {
        self.session.set_currency(code);
    }

    #[wasm_bindgen(getter)]
    pub fn currency(&self) -> String {
        self.session.currency().to_owned()
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.session.is_ready()
    }

    #[wasm_bindgen(js_name = cityCount)]
    pub fn city_count(&self) -> usize {
        self.session.index().len()
    }

    /// Suggestions for the input value: `[{ label, score, city }]`, at most 3.
    pub fn search(&self, query: &str) -> Result<JsValue, JsError> {
        hits_to_js(self.session.search(query))
    }

    /// Card view model for a suggestion label or city name, `null` if unknown.
    #[wasm_bindgen(js_name = viewModel)]
    pub fn view_model(&self, label: &str) -> Result<JsValue, JsError> {
        match self.session.select(label) {
            Some(vm) => to_value(&vm).map_err(js_err),
            None => Ok(JsValue::NULL),
        }
    }

    /// Card markup for a suggestion label or city name, `undefined` if unknown.
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, label: &str) -> Option<String> {
        self.session.select(label).map(|vm| render_card_html(&vm))
    }
}

/* --------------------------------------------------------------------------
   Stateless helpers
-------------------------------------------------------------------------- */

/// Ranks a decoded catalog array without keeping any state.
#[wasm_bindgen]
pub fn rank_cities(query: &str, catalog: JsValue) -> Result<JsValue, JsError> {
    let cities = catalog_from_value(from_js(catalog)?).map_err(js_err)?;
    hits_to_js(citydb_core::rank(query, &cities))
}

#[wasm_bindgen]
pub fn currency_symbol(code: &str) -> String {
    citydb_core::render::currency_symbol(code)
}

/// Star rating (0..=5) for a mean EUR price; `null`/`undefined` gives 0.
#[wasm_bindgen]
pub fn price_to_stars(price: Option<f64>) -> u8 {
    citydb_core::render::price_to_stars(price)
}

#[wasm_bindgen]
pub fn known_currencies() -> js_sys::Array {
    citydb_core::render::KNOWN_CURRENCIES
        .iter()
        .map(|c| JsValue::from_str(c))
        .collect()
}
