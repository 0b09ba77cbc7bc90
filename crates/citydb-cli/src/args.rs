use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citydb
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "Search a city catalog and render city price/rating cards"
)]
pub struct CliArgs {
    /// Path to the city catalog (.json or .json.gz; default: bundled sample)
    #[arg(short = 'c', long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to the average price table (default: bundled sample)
    #[arg(short = 'p', long = "prices", global = true)]
    pub prices: Option<PathBuf>,

    /// Path to the exchange rate table (default: bundled sample)
    #[arg(short = 'r', long = "rates", global = true)]
    pub rates: Option<PathBuf>,

    /// Load all tables from a running site backend instead of files
    #[cfg(feature = "fetch")]
    #[arg(short = 'u', long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Display currency code (e.g. USD, GBP)
    #[arg(long = "currency", global = true, default_value = "EUR")]
    pub currency: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded tables
    Stats,

    /// Rank cities for a search-box query
    Search {
        /// Query text (case-insensitive)
        query: String,

        /// Ignore accents when matching (e.g. "zurich" finds "Zürich")
        #[arg(long)]
        folded: bool,

        /// Maximum number of suggestions
        #[arg(short = 'n', long, default_value_t = 3)]
        limit: usize,
    },

    /// Show the price/rating card of a city
    Card {
        /// City name, or a suggestion label like "Paris, France"
        city: String,

        /// Print the card markup instead of text
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the currencies available in the rate table
    Currencies,
}
