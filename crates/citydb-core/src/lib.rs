// crates/citydb-core/src/lib.rs

//! # citydb-core
//!
//! City catalog search and city card rendering for travel front-ends.
//!
//! The crate has two pure entry points:
//!
//! - [`search::rank`] ranks a catalog of [`CityRecord`]s against a typeahead
//!   query (prefix beats substring, city beats country, top 3).
//! - [`render::build_view_model`] turns one city plus the price and
//!   exchange-rate tables into a [`CityViewModel`] (converted price, star
//!   rating, links), and [`render::render_card_html`] assembles markup.
//!
//! Everything else is plumbing around them: [`loader`] parses the JSON
//! payloads, and [`session::Session`] is the caller-side controller that
//! owns the loaded tables and the selected currency.
//!
//! ```rust
//! use citydb_core::prelude::*;
//!
//! let catalog = vec![
//!     CityRecord::new("Paris", "FR", "France"),
//!     CityRecord::new("Perth", "AU", "Australia"),
//!     CityRecord::new("London", "GB", "United Kingdom"),
//! ];
//! let hits = rank("par", &catalog);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].city.city, "Paris");
//! assert_eq!(hits[0].score, 2);
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod render;
pub mod search;
pub mod session;
pub mod text;

// Re-exports
pub use crate::error::{CityDbError, Result};
pub use crate::model::{CityRecord, DbStats, ExchangeRateTable, PriceTable, RenderContext};
pub use crate::render::{build_view_model, CityViewModel, PriceDisplay};
pub use crate::search::{rank, SearchIndex, SearchOptions, SearchResult};
pub use crate::session::Session;
pub use crate::text::MatchMode;
