// crates/citydb-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use super::{parse_catalog, parse_prices, parse_rates};
use crate::error::{CityDbError, Result};
use crate::model::{CityRecord, ExchangeRateTable, PriceTable};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use tracing::info;

pub const CATALOG_PATH: &str = "static/js/cities.json";
pub const PRICES_PATH: &str = "average-prices";
pub const RATES_PATH: &str = "exchange-rates";
pub const RATES_UPDATED_PATH: &str = "exchange-last-updated";

/// Blocking GET client for the site backend.
///
/// One request per table, no retry. Errors surface as
/// [`CityDbError::Http`]; callers decide whether a missing table is fatal.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: Client,
}

#[derive(Deserialize)]
struct LastUpdated {
    timestamp: Option<String>,
}

impl HttpSource {
    /// `base_url` is the site root, e.g. `http://localhost:8000/`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| CityDbError::InvalidData(format!("bad base url {base_url}: {e}")))?;
        // Url::join drops the last segment unless the path ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn get(&self, path: &str) -> Result<reqwest::blocking::Response> {
        let url = self
            .base
            .join(path)
            .map_err(|e| CityDbError::InvalidData(format!("bad endpoint {path}: {e}")))?;
        info!(%url, "fetching");
        Ok(self.client.get(url).send()?.error_for_status()?)
    }

    pub fn fetch_catalog(&self) -> Result<Vec<CityRecord>> {
        parse_catalog(self.get(CATALOG_PATH)?)
    }

    pub fn fetch_prices(&self) -> Result<PriceTable> {
        parse_prices(self.get(PRICES_PATH)?)
    }

    pub fn fetch_rates(&self) -> Result<ExchangeRateTable> {
        parse_rates(self.get(RATES_PATH)?)
    }

    /// Timestamp of the backend's exchange-rate cache, if it has one.
    pub fn fetch_rates_updated(&self) -> Result<Option<String>> {
        let body: LastUpdated = serde_json::from_reader(self.get(RATES_UPDATED_PATH)?)?;
        Ok(body.timestamp)
    }
}
