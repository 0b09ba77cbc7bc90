//! citydb: command-line interface for citydb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ citydb stats
//!
//! - Rank cities for a search-box query
//!   $ citydb search par
//!   $ citydb search zurich --folded
//!
//! - Show a city card in another currency
//!   $ citydb --currency GBP card "London, United Kingdom"
//!   $ citydb card rome --html
//!
//! Set `RUST_LOG=debug` to see what the loaders read.
use citydb_cli::args::CliArgs;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let session = citydb_cli::load_session(&args)?;

    let stdout = std::io::stdout();
    citydb_cli::run(&session, &args.command, &mut stdout.lock())
}
