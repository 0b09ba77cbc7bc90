// crates/citydb-core/src/search.rs

//! Typeahead ranking over the city catalog.
//!
//! Scoring is a ladder, the first rung that applies wins:
//!
//! | match                        | score |
//! |------------------------------|-------|
//! | city name starts with query  | 2     |
//! | city name contains query     | 1     |
//! | country name starts with it  | 1     |
//! | country name contains it     | 0     |
//! | nothing                      | -1 (dropped) |
//!
//! Hits are sorted by score, highest first, keeping catalog order on ties,
//! and cut to [`MAX_RESULTS`].

use crate::model::{CityRecord, DbStats};
use crate::text::MatchMode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of suggestions shown under the search box.
pub const MAX_RESULTS: usize = 3;

/// Score of a city that does not match at all.
pub const EXCLUDED: i8 = -1;

/// One ranked suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    pub city: &'a CityRecord,
    pub score: i8,
}

impl SearchResult<'_> {
    /// Text shown in the suggestion list, e.g. `"Paris, France"`.
    ///
    /// Selecting a suggestion writes the same text back into the input.
    pub fn label(&self) -> String {
        format!("{}, {}", self.city.city, self.city.country_name)
    }
}

/// Knobs for [`SearchIndex::rank_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Maximum number of hits returned.
    pub limit: usize,
    pub mode: MatchMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: MAX_RESULTS,
            mode: MatchMode::Lowercase,
        }
    }
}

/// Scores one city against an already normalized, non-empty query.
///
/// `city_name` and `country_name` must be normalized with the same
/// [`MatchMode`] as `q`.
#[inline]
pub fn score_names(city_name: &str, country_name: &str, q: &str) -> i8 {
    if city_name.starts_with(q) {
        2
    } else if city_name.contains(q) {
        1
    } else if country_name.starts_with(q) {
        1
    } else if country_name.contains(q) {
        0
    } else {
        EXCLUDED
    }
}

/// Ranks `catalog` against `query` with the default options.
///
/// Pure function of its inputs. An empty (or all-whitespace) query returns
/// no results.
///
/// ```rust
/// use citydb_core::{rank, CityRecord};
///
/// let catalog = vec![
///     CityRecord::new("Paris", "FR", "France"),
///     CityRecord::new("Perth", "AU", "Australia"),
///     CityRecord::new("London", "GB", "United Kingdom"),
/// ];
/// let hits = rank("par", &catalog);
/// assert_eq!(hits.len(), 1);
/// assert_eq!((hits[0].city.city.as_str(), hits[0].score), ("Paris", 2));
/// ```
pub fn rank<'a>(query: &str, catalog: &'a [CityRecord]) -> Vec<SearchResult<'a>> {
    rank_with(query, catalog, &SearchOptions::default())
}

/// Ranks `catalog` against `query` with explicit [`SearchOptions`].
pub fn rank_with<'a>(
    query: &str,
    catalog: &'a [CityRecord],
    opts: &SearchOptions,
) -> Vec<SearchResult<'a>> {
    let q = opts.mode.normalize_query(query);
    if q.is_empty() || opts.limit == 0 {
        return Vec::new();
    }

    let mut out: Vec<SearchResult<'a>> = catalog
        .iter()
        .filter_map(|city| {
            let score = score_names(
                &opts.mode.normalize(&city.city),
                &opts.mode.normalize(&city.country_name),
                &q,
            );
            (score != EXCLUDED).then_some(SearchResult { city, score })
        })
        .collect();

    // `sort_by` is a stable merge sort: equal scores keep catalog order.
    out.sort_by(|a, b| b.score.cmp(&a.score));
    out.truncate(opts.limit);
    out
}

/// The in-memory city catalog, loaded once per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    cities: Vec<CityRecord>,
}

impl SearchIndex {
    pub fn new(cities: Vec<CityRecord>) -> Self {
        Self { cities }
    }

    /// All cities in catalog order.
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Top [`MAX_RESULTS`] matches for `query`. See [`rank`].
    pub fn rank(&self, query: &str) -> Vec<SearchResult<'_>> {
        rank(query, &self.cities)
    }

    pub fn rank_with(&self, query: &str, opts: &SearchOptions) -> Vec<SearchResult<'_>> {
        rank_with(query, &self.cities, opts)
    }

    /// Finds a city by name, case-insensitive.
    pub fn find_by_name(&self, name: &str) -> Option<&CityRecord> {
        self.cities.iter().find(|c| c.is_named(name))
    }

    /// Finds a city by the suggestion label (`"City, Country Name"`), falling
    /// back to a plain name lookup.
    pub fn find_by_label(&self, label: &str) -> Option<&CityRecord> {
        let label = label.trim();
        let wanted = label.to_lowercase();
        self.cities
            .iter()
            .find(|c| format!("{}, {}", c.city, c.country_name).to_lowercase() == wanted)
            .or_else(|| self.find_by_name(label))
    }

    pub fn stats(&self) -> DbStats {
        let countries: HashSet<String> = self
            .cities
            .iter()
            .map(|c| c.country.to_ascii_uppercase())
            .collect();
        DbStats {
            cities: self.cities.len(),
            countries: countries.len(),
        }
    }
}

impl From<Vec<CityRecord>> for SearchIndex {
    fn from(cities: Vec<CityRecord>) -> Self {
        Self::new(cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_prefers_city_prefix() {
        assert_eq!(score_names("paris", "france", "par"), 2);
        assert_eq!(score_names("soparis", "france", "par"), 1);
        assert_eq!(score_names("nice", "france", "fra"), 1);
        assert_eq!(score_names("nice", "france", "anc"), 0);
        assert_eq!(score_names("nice", "france", "xyz"), EXCLUDED);
    }

    #[test]
    fn city_contains_beats_country_contains() {
        // "an" is inside the city name and inside the country name; the
        // city rung is checked first.
        assert_eq!(score_names("milan", "italy", "an"), 1);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let catalog = vec![CityRecord::new("Paris", "FR", "France")];
        let opts = SearchOptions {
            limit: 0,
            ..SearchOptions::default()
        };
        assert!(rank_with("par", &catalog, &opts).is_empty());
    }

    #[test]
    fn label_joins_city_and_country() {
        let city = CityRecord::new("Porto", "PT", "Portugal");
        let hit = SearchResult {
            city: &city,
            score: 2,
        };
        assert_eq!(hit.label(), "Porto, Portugal");
    }

    #[test]
    fn stats_count_distinct_countries() {
        let index = SearchIndex::new(vec![
            CityRecord::new("Porto", "PT", "Portugal"),
            CityRecord::new("Lisbon", "pt", "Portugal"),
            CityRecord::new("Madrid", "ES", "Spain"),
        ]);
        assert_eq!(
            index.stats(),
            DbStats {
                cities: 3,
                countries: 2
            }
        );
    }

    #[test]
    fn find_by_label_and_name() {
        let index = SearchIndex::new(vec![CityRecord::new("Porto", "PT", "Portugal")]);
        assert!(index.find_by_label("Porto, Portugal").is_some());
        assert!(index.find_by_label("porto").is_some());
        assert!(index.find_by_label("Lisbon").is_none());
    }

    #[test]
    fn find_by_label_ignores_non_ascii_case() {
        let index = SearchIndex::new(vec![CityRecord::new("Zürich", "CH", "Switzerland")]);
        let hit = index.find_by_label("ZÜRICH, SWITZERLAND").map(|c| c.city.as_str());
        assert_eq!(hit, Some("Zürich"));
    }
}
