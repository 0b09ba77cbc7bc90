// crates/citydb-core/src/render/mod.rs

//! # City card renderer
//!
//! Turns one [`CityRecord`](crate::CityRecord) plus the price and
//! exchange-rate tables into a [`CityViewModel`], and the view model into
//! markup.
//!
//! Two rules matter:
//! - a city without a price entry is not an error, it renders the loading
//!   placeholder;
//! - the star rating is computed from the EUR mean, so switching currency
//!   never changes it.

mod currency;
mod html;
mod rating;
mod view;

pub use currency::{currency_symbol, format_price, KNOWN_CURRENCIES};
pub use html::{render_card_html, render_stars_html};
pub use rating::{price_to_stars, MAX_STARS};
pub use view::{build_view_model, CityViewModel, PriceDisplay};
