// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and the three JSON
//! payloads the site backend serves:
//!
//! - the city catalog (`cities.json`): `[{city, country, country_name, lat, lng, bestSeason}]`
//! - the price table: either a bare `{city: price|null}` map or the cache
//!   file shape `{timestamp, prices: {...}}`
//! - the exchange rates: `{timestamp?, rates: {code: rate}}`
//!
//! Loading is one-shot. A host that fails to load a table keeps it as
//! `None`, which the renderer shows as "price loading".

use crate::error::{CityDbError, Result};
use crate::model::{CityRecord, ExchangeRateTable, PriceTable};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[cfg(feature = "fetch")]
mod fetch;
#[cfg(feature = "fetch")]
pub use fetch::HttpSource;

pub const DEFAULT_CATALOG_FILE: &str = "cities.json";
pub const DEFAULT_PRICES_FILE: &str = "average_prices.json";
pub const DEFAULT_RATES_FILE: &str = "exchange_rates.json";

/// Directory of the sample dataset shipped with the crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Price payload, accepted in both shapes the backend produces.
#[derive(Deserialize)]
#[serde(untagged)]
enum PricesPayload {
    Cached {
        #[serde(default)]
        timestamp: Option<String>,
        prices: HashMap<String, Option<f64>>,
    },
    Bare(HashMap<String, Option<f64>>),
}

#[derive(Deserialize)]
struct RatesPayload {
    #[serde(default)]
    timestamp: Option<String>,
    rates: HashMap<String, Option<f64>>,
}

/// Parses the city catalog.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<CityRecord>> {
    catalog_from_payload(serde_json::from_reader(reader)?)
}

/// Parses the price table from either payload shape.
pub fn parse_prices<R: Read>(reader: R) -> Result<PriceTable> {
    prices_from_payload(serde_json::from_reader(reader)?)
}

/// Parses the exchange-rate payload. `EUR -> 1.0` is injected when absent.
pub fn parse_rates<R: Read>(reader: R) -> Result<ExchangeRateTable> {
    rates_from_payload(serde_json::from_reader(reader)?)
}

/// Catalog from an already decoded JSON value (e.g. handed over from JS).
pub fn catalog_from_value(value: serde_json::Value) -> Result<Vec<CityRecord>> {
    catalog_from_payload(serde_json::from_value(value)?)
}

/// Price table from an already decoded JSON value, either payload shape.
pub fn prices_from_value(value: serde_json::Value) -> Result<PriceTable> {
    prices_from_payload(serde_json::from_value(value)?)
}

/// Exchange rates from an already decoded `{rates: {...}}` JSON value.
pub fn rates_from_value(value: serde_json::Value) -> Result<ExchangeRateTable> {
    rates_from_payload(serde_json::from_value(value)?)
}

fn catalog_from_payload(cities: Vec<CityRecord>) -> Result<Vec<CityRecord>> {
    debug!(count = cities.len(), "parsed city catalog");
    Ok(cities)
}

fn prices_from_payload(payload: PricesPayload) -> Result<PriceTable> {
    let prices = match payload {
        PricesPayload::Cached { timestamp, prices } => {
            debug!(timestamp = timestamp.as_deref().unwrap_or("-"), "price cache payload");
            prices
        }
        PricesPayload::Bare(prices) => prices,
    };

    let unpriced = prices.values().filter(|p| p.is_none()).count();
    if unpriced > 0 {
        warn!(unpriced, "price table has cities without a mean price");
    }
    debug!(count = prices.len(), "parsed price table");
    Ok(PriceTable::new(prices))
}

fn rates_from_payload(payload: RatesPayload) -> Result<ExchangeRateTable> {
    let mut rates = HashMap::with_capacity(payload.rates.len());
    for (code, rate) in payload.rates {
        match rate {
            Some(r) if r.is_finite() && r > 0.0 => {
                rates.insert(code, r);
            }
            other => warn!(%code, rate = ?other, "dropping unusable exchange rate"),
        }
    }
    debug!(count = rates.len(), "parsed exchange rates");
    Ok(ExchangeRateTable::new(rates).with_timestamp(payload.timestamp))
}

/// Loads the city catalog from a `.json` (or `.json.gz`) file.
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<Vec<CityRecord>> {
    parse_catalog(open_stream(path.as_ref())?)
}

/// Loads the price table from a `.json` (or `.json.gz`) file.
pub fn load_prices_from_path(path: impl AsRef<Path>) -> Result<PriceTable> {
    parse_prices(open_stream(path.as_ref())?)
}

/// Loads the exchange rates from a `.json` (or `.json.gz`) file.
pub fn load_rates_from_path(path: impl AsRef<Path>) -> Result<ExchangeRateTable> {
    parse_rates(open_stream(path.as_ref())?)
}

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CityDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "opened payload");

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if gzipped {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(CityDbError::InvalidData(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
