// crates/citydb-core/src/render/currency.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Currency codes with a dedicated display symbol, in dropdown order.
pub const KNOWN_CURRENCIES: [&str; 11] = [
    "EUR", "USD", "GBP", "JPY", "AUD", "RON", "CAD", "CHF", "CZK", "MXN", "HUF",
];

static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("EUR", "€"),
        ("USD", "$"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("AUD", "A$"),
        ("RON", "lei"),
        ("CAD", "C$"),
        ("CHF", "CHF"),
        ("CZK", "Kč"),
        ("MXN", "MX$"),
        ("HUF", "Ft"),
    ])
});

/// Display symbol for a currency code.
///
/// Unknown codes render as the code followed by a space (`"SEK "`), so the
/// amount never touches the code.
pub fn currency_symbol(code: &str) -> String {
    match SYMBOLS.get(code) {
        Some(sym) => (*sym).to_owned(),
        None => format!("{code} "),
    }
}

/// `"<symbol><amount with 2 decimals>"`, e.g. `"$54.00"`.
pub fn format_price(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}
