// crates/citydb-core/src/text.rs

//! Text helpers: query normalization, accent folding and escaping.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How names and queries are normalized before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Trim + lowercase. "zur" does not match "Zürich".
    #[default]
    Lowercase,
    /// Trim + transliterate to ASCII + lowercase. "zur" matches "Zürich".
    Folded,
}

impl MatchMode {
    /// Normalizes a catalog name for comparison.
    #[inline]
    pub fn normalize(self, s: &str) -> String {
        match self {
            MatchMode::Lowercase => s.to_lowercase(),
            MatchMode::Folded => fold_key(s),
        }
    }

    /// Normalizes a typeahead query: trims, then applies [`MatchMode::normalize`].
    #[inline]
    pub fn normalize_query(self, q: &str) -> String {
        self.normalize(q.trim())
    }
}

/// Trims and lowercases a typeahead query.
///
/// An empty result means "no query": the caller clears its result list.
#[inline]
pub fn normalize_query(q: &str) -> String {
    MatchMode::Lowercase.normalize_query(q)
}

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Kraków` -> `Krakow`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use citydb_core::text::fold_key;
///
/// assert_eq!(fold_key("Kraków"), "krakow");
/// assert_eq!(fold_key("Zürich"), "zurich");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Percent-encodes `s` the way JavaScript's `encodeURIComponent` does.
///
/// Unreserved characters are `A-Z a-z 0-9 - _ . ! ~ * ' ( )`; every other
/// byte of the UTF-8 encoding becomes `%XX` with uppercase hex.
///
/// ```rust
/// use citydb_core::text::encode_uri_component;
///
/// assert_eq!(encode_uri_component("São Paulo"), "S%C3%A3o%20Paulo");
/// ```
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                // Writing into a String cannot fail.
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
