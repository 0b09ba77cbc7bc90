use citydb_core::prelude::*;
use citydb_core::search::{rank_with, MAX_RESULTS};

fn catalog() -> Vec<CityRecord> {
    vec![
        CityRecord::new("Paris", "FR", "France"),
        CityRecord::new("Perth", "AU", "Australia"),
        CityRecord::new("London", "GB", "United Kingdom"),
        CityRecord::new("Parma", "IT", "Italy"),
        CityRecord::new("Nice", "FR", "France"),
        CityRecord::new("Lyon", "FR", "France"),
        CityRecord::new("Zürich", "CH", "Switzerland"),
        CityRecord::new("Cancún", "MX", "Mexico"),
    ]
}

fn names<'a>(hits: &[SearchResult<'a>]) -> Vec<(&'a str, i8)> {
    hits.iter().map(|h| (h.city.city.as_str(), h.score)).collect()
}

#[test]
fn par_only_matches_paris_in_the_small_catalog() {
    let small = vec![
        CityRecord::new("Paris", "FR", "France"),
        CityRecord::new("Perth", "AU", "Australia"),
        CityRecord::new("London", "GB", "United Kingdom"),
    ];
    assert_eq!(names(&rank("par", &small)), vec![("Paris", 2)]);
}

#[test]
fn empty_and_blank_queries_return_nothing() {
    let cat = catalog();
    assert!(rank("", &cat).is_empty());
    assert!(rank("   \t", &cat).is_empty());
}

#[test]
fn query_is_trimmed_and_case_insensitive() {
    let cat = catalog();
    assert_eq!(rank("  PAR ", &cat), rank("par", &cat));
}

#[test]
fn results_are_capped_sorted_and_non_negative() {
    let cat = catalog();
    for q in ["a", "e", "r", "fr", "on", "i", "n"] {
        let hits = rank(q, &cat);
        assert!(hits.len() <= MAX_RESULTS, "{q}: {} hits", hits.len());
        assert!(hits.iter().all(|h| h.score >= 0), "{q}");
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score), "{q}");
    }
}

#[test]
fn prefix_outranks_contains() {
    let cat = vec![
        CityRecord::new("Italy Town", "XX", "Nowhere"),
        CityRecord::new("Lyon", "FR", "France"),
    ];
    assert_eq!(names(&rank("ly", &cat)), vec![("Lyon", 2), ("Italy Town", 1)]);
}

#[test]
fn ties_keep_catalog_order() {
    let cat = catalog();
    // Every French city matches "fra" by country-name prefix (score 1).
    assert_eq!(
        names(&rank("fra", &cat)),
        vec![("Paris", 1), ("Nice", 1), ("Lyon", 1)]
    );
}

#[test]
fn country_contains_scores_zero_and_sorts_last() {
    let cat = vec![
        CityRecord::new("Bern", "CH", "Switzerland"),
        CityRecord::new("Landshut", "DE", "Germany"),
    ];
    // "land": Landshut prefix (2), Switzerland contains (0).
    assert_eq!(
        names(&rank("land", &cat)),
        vec![("Landshut", 2), ("Bern", 0)]
    );
}

#[test]
fn country_prefix_and_city_contains_tie() {
    let cat = vec![
        CityRecord::new("Vienna", "AT", "Austria"),
        CityRecord::new("Kaus", "XX", "Elsewhere"),
    ];
    // Vienna: country prefix "aus" -> 1. Kaus: city contains "aus" -> 1.
    assert_eq!(names(&rank("aus", &cat)), vec![("Vienna", 1), ("Kaus", 1)]);
}

#[test]
fn lowercase_mode_does_not_fold_accents() {
    let cat = catalog();
    assert!(rank("zur", &cat).is_empty());
    assert_eq!(names(&rank("zür", &cat)), vec![("Zürich", 2)]);
}

#[test]
fn folded_mode_matches_without_accents() {
    let cat = catalog();
    let opts = SearchOptions {
        mode: MatchMode::Folded,
        ..SearchOptions::default()
    };
    assert_eq!(names(&rank_with("zur", &cat, &opts)), vec![("Zürich", 2)]);
    assert_eq!(names(&rank_with("cancun", &cat, &opts)), vec![("Cancún", 2)]);
}

#[test]
fn ranking_does_not_touch_the_catalog() {
    let cat = catalog();
    let before = cat.clone();
    let _ = rank("a", &cat);
    assert_eq!(cat, before);
}

#[test]
fn index_wraps_the_free_function() {
    let index = SearchIndex::new(catalog());
    assert_eq!(index.rank("ni"), rank("ni", index.cities()));
    assert_eq!(index.stats().countries, 6);
}
