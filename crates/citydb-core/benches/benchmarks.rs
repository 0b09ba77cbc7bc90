use citydb_core::prelude::*;
use citydb_core::search::rank_with;
use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use std::hint::black_box;

fn synthetic_catalog(n: usize) -> Vec<CityRecord> {
    let countries = [
        ("FR", "France"),
        ("DE", "Germany"),
        ("IT", "Italy"),
        ("ES", "Spain"),
        ("PT", "Portugal"),
    ];
    (0..n)
        .map(|i| {
            let (code, name) = countries[i % countries.len()];
            CityRecord::new(&format!("City{i} Süd"), code, name)
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let catalog = synthetic_catalog(500);
    let folded = SearchOptions {
        mode: MatchMode::Folded,
        ..SearchOptions::default()
    };

    c.bench_function("rank_prefix_500", |b| {
        b.iter(|| rank(black_box("city4"), black_box(&catalog)))
    });
    c.bench_function("rank_country_500", |b| {
        b.iter(|| rank(black_box("ger"), black_box(&catalog)))
    });
    c.bench_function("rank_folded_500", |b| {
        b.iter(|| rank_with(black_box("sud"), black_box(&catalog), &folded))
    });
}

fn bench_view_model(c: &mut Criterion) {
    let city = CityRecord::new("Lisbon", "PT", "Portugal").with_best_season("Spring");
    let prices: PriceTable = [("lisbon".to_owned(), Some(45.0))].into_iter().collect();
    let rates = ExchangeRateTable::new(HashMap::from([("USD".to_owned(), 1.08)]));
    let ctx = RenderContext::new(Some(&prices), Some(&rates), "USD");

    c.bench_function("build_view_model", |b| {
        b.iter(|| build_view_model(black_box(&city), black_box(&ctx)))
    });
    c.bench_function("render_card_html", |b| {
        let vm = build_view_model(&city, &ctx);
        b.iter(|| render_card_html(black_box(&vm)))
    });
}

criterion_group!(benches, bench_rank, bench_view_model);
criterion_main!(benches);
