//! Basic usage example for citydb-rs
//!
//! Loads the bundled sample tables, runs a few search-box queries and
//! prints city cards in two currencies.

use citydb_core::loader::{
    default_data_dir, load_catalog_from_path, load_prices_from_path, load_rates_from_path,
    DEFAULT_CATALOG_FILE, DEFAULT_PRICES_FILE, DEFAULT_RATES_FILE,
};
use citydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== citydb-rs Basic Usage Example ===\n");

    let dir = default_data_dir();
    let mut session = Session::new(load_catalog_from_path(dir.join(DEFAULT_CATALOG_FILE))?);
    let stats = session.stats();
    println!("✓ Loaded {} cities in {} countries\n", stats.cities, stats.countries);

    // Example 1: typeahead before the prices arrive
    println!("--- Example 1: Search box ---");
    for query in ["par", "it", "ro", "  "] {
        let hits = session.search(query);
        println!("{query:?} -> {} suggestion(s)", hits.len());
        for hit in hits {
            println!("  {} (score {})", hit.label(), hit.score);
        }
    }
    println!();

    // Example 2: a card without tables shows the placeholder
    println!("--- Example 2: Card before prices load ---");
    if let Some(vm) = session.select("Rome, Italy") {
        println!("  {} price ready: {}", vm.city, vm.price_ready());
    }
    println!();

    session.set_prices(load_prices_from_path(dir.join(DEFAULT_PRICES_FILE))?);
    session.set_rates(load_rates_from_path(dir.join(DEFAULT_RATES_FILE))?.with_fallbacks());

    // Example 3: same city, two currencies, same stars
    println!("--- Example 3: Currency switch ---");
    for code in ["EUR", "JPY"] {
        session.set_currency(code);
        if let Some(vm) = session.select("Lisbon") {
            println!(
                "  {} in {code}: {} ({} stars)",
                vm.city,
                vm.price.text().unwrap_or("loading"),
                vm.stars
            );
        }
    }
    println!();

    // Example 4: markup for the host page
    println!("--- Example 4: Card markup ---");
    if let Some(html) = session.select_html("Prague") {
        println!("{html}");
    }

    Ok(())
}
