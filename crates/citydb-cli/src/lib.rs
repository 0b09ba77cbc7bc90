//! citydb-cli
//! ==========
//!
//! Command-line front-end for `citydb-core`: the same search box and city
//! card a browser page shows, in a terminal.
//!
//! Basic usage:
//!
//! ```text
//! citydb stats
//! citydb search par
//! citydb --currency USD card "Paris, France"
//! citydb card lisbon --html
//! citydb currencies
//! ```
//!
//! Without `--catalog/--prices/--rates` the bundled sample data of
//! `citydb-core` is used. A price or rate table that fails to load is
//! reported and left out; cards then show the loading placeholder.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{Context, Result};
use citydb_core::loader::{self, DEFAULT_CATALOG_FILE, DEFAULT_PRICES_FILE, DEFAULT_RATES_FILE};
use citydb_core::render::{currency_symbol, PriceDisplay, MAX_STARS};
use citydb_core::{CityViewModel, MatchMode, SearchOptions, Session};
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

/// Builds the session from files (or the backend, with `--base-url`).
///
/// A missing catalog is fatal; a missing price or rate table is not.
pub fn load_session(args: &CliArgs) -> Result<Session> {
    #[cfg(feature = "fetch")]
    {
        if let Some(url) = &args.base_url {
            return load_session_http(url, &args.currency);
        }
    }

    let dir = loader::default_data_dir();
    let pick = |p: &Option<PathBuf>, file: &str| p.clone().unwrap_or_else(|| dir.join(file));

    let catalog_path = pick(&args.catalog, DEFAULT_CATALOG_FILE);
    let catalog = loader::load_catalog_from_path(&catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let mut session = Session::new(catalog);

    match loader::load_prices_from_path(pick(&args.prices, DEFAULT_PRICES_FILE)) {
        Ok(prices) => session.set_prices(prices),
        Err(e) => warn!("price table not loaded: {e}"),
    }
    // Rate files are raw upstream snapshots; the backend serves them with
    // its fallback currencies merged in.
    match loader::load_rates_from_path(pick(&args.rates, DEFAULT_RATES_FILE)) {
        Ok(rates) => session.set_rates(rates.with_fallbacks()),
        Err(e) => warn!("exchange rates not loaded: {e}"),
    }
    session.set_currency(&args.currency);
    Ok(session)
}

#[cfg(feature = "fetch")]
fn load_session_http(url: &str, currency: &str) -> Result<Session> {
    let source = loader::HttpSource::new(url)?;
    let catalog = source
        .fetch_catalog()
        .with_context(|| format!("fetching catalog from {url}"))?;
    let mut session = Session::new(catalog);

    match source.fetch_prices() {
        Ok(prices) => session.set_prices(prices),
        Err(e) => warn!("price table not loaded: {e}"),
    }
    match source.fetch_rates() {
        Ok(rates) => session.set_rates(rates),
        Err(e) => warn!("exchange rates not loaded: {e}"),
    }
    session.set_currency(currency);
    Ok(session)
}

/// Executes `command` against `session`, writing human output to `out`.
pub fn run(session: &Session, command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Stats => {
            let stats = session.stats();
            writeln!(out, "Catalog statistics:")?;
            writeln!(out, "  Cities: {}", stats.cities)?;
            writeln!(out, "  Countries: {}", stats.countries)?;
            match session.prices() {
                Some(p) => writeln!(out, "  Prices: {}", p.len())?,
                None => writeln!(out, "  Prices: not loaded")?,
            }
            match session.rates() {
                Some(r) => writeln!(
                    out,
                    "  Rates: {} (updated {})",
                    r.len(),
                    r.timestamp().unwrap_or("unknown")
                )?,
                None => writeln!(out, "  Rates: not loaded")?,
            }
        }

        Commands::Search {
            query,
            folded,
            limit,
        } => {
            let opts = SearchOptions {
                limit: *limit,
                mode: if *folded {
                    MatchMode::Folded
                } else {
                    MatchMode::Lowercase
                },
            };
            let hits = session.index().rank_with(query, &opts);
            if hits.is_empty() {
                writeln!(out, "No cities found matching: {query}")?;
            }
            for hit in hits {
                writeln!(out, "{} (score {})", hit.label(), hit.score)?;
            }
        }

        Commands::Card { city, html, json } => match session.select(city) {
            Some(vm) if *html => writeln!(out, "{}", citydb_core::render::render_card_html(&vm))?,
            Some(vm) if *json => writeln!(out, "{}", serde_json::to_string_pretty(&vm)?)?,
            Some(vm) => write_card_text(&vm, out)?,
            None => anyhow::bail!("No city found for: {city}"),
        },

        Commands::Currencies => match session.rates() {
            Some(rates) => {
                for code in rates.currencies() {
                    let rate = rates.rate_or_identity(code);
                    writeln!(out, "{code}  {}  {rate}", currency_symbol(code).trim_end())?;
                }
            }
            None => writeln!(out, "Exchange rates not loaded")?,
        },
    }
    Ok(())
}

fn write_card_text(vm: &CityViewModel, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} ({}, {})", vm.city, vm.country_name, vm.country_code)?;
    writeln!(out, "  Best time to visit: {}", vm.best_season)?;
    match &vm.price {
        PriceDisplay::Ready { text, .. } => {
            writeln!(out, "  Avg. price: {text}")?;
            let stars: String = (1..=MAX_STARS)
                .map(|i| if i <= vm.stars { '★' } else { '☆' })
                .collect();
            writeln!(out, "  Expensiveness: {stars}")?;
        }
        PriceDisplay::Loading => writeln!(out, "  Avg. price: (loading)")?,
    }
    writeln!(out, "  Map: {}", vm.maps_url)?;
    writeln!(out, "  Predict: {}", vm.predict_url)?;
    Ok(())
}
