//! citydb prelude: bring common types and functions into scope for hosts and demos.

#![allow(unused_imports)]

pub use crate::error::{CityDbError, Result};
pub use crate::model::{CityRecord, DbStats, ExchangeRateTable, PriceTable, RenderContext};
pub use crate::render::{
    build_view_model, currency_symbol, price_to_stars, render_card_html, CityViewModel,
    PriceDisplay,
};
pub use crate::search::{rank, SearchIndex, SearchOptions, SearchResult};
pub use crate::session::Session;
pub use crate::text::{fold_key, normalize_query, MatchMode};
