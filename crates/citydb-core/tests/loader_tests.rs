use citydb_core::loader::{
    load_catalog_from_path, load_prices_from_path, load_rates_from_path,
};
use citydb_core::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("citydb-loader-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

const CATALOG: &str = r#"[
  {"city":"Paris","country":"FR","country_name":"France","lat":48.85,"lng":2.35,"bestSeason":"Spring"},
  {"city":"Perth","country":"AU","country_name":"Australia","lat":-31.95,"lng":115.86,"bestSeason":""}
]"#;

#[test]
fn loads_plain_json_files_into_a_session() {
    let cat = scratch("cities.json");
    let pr = scratch("average_prices.json");
    let ra = scratch("exchange_rates.json");
    fs::write(&cat, CATALOG).unwrap();
    fs::write(&pr, r#"{"timestamp":"2025-06-01T10:00:00","prices":{"paris":95.4,"perth":null}}"#)
        .unwrap();
    fs::write(&ra, r#"{"rates":{"USD":1.1}}"#).unwrap();

    let mut session = Session::new(load_catalog_from_path(&cat).unwrap());
    session.set_prices(load_prices_from_path(&pr).unwrap());
    session.set_rates(load_rates_from_path(&ra).unwrap());
    session.set_currency("USD");

    let hits = session.search("pe");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].label(), "Perth, Australia");

    let paris = session.select("Paris, France").unwrap();
    assert_eq!(paris.price.text(), Some("$104.94"));
    assert_eq!(paris.stars, 5);

    let perth = session.select("perth").unwrap();
    assert_eq!(perth.price.text(), Some("$0.00"));
    assert_eq!(perth.stars, 0);
    assert_eq!(perth.best_season, "N/A");
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_catalog() {
    use flate2::{write::GzEncoder, Compression};

    let path = scratch("cities.json.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(CATALOG.as_bytes()).unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let cities = load_catalog_from_path(&path).unwrap();
    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].best_season, "Spring");
}

#[test]
fn malformed_json_is_a_json_error() {
    let path = scratch("broken.json");
    let mut f = fs::File::create(&path).unwrap();
    f.write_all(b"{ not json").unwrap();
    drop(f);

    assert!(matches!(
        load_rates_from_path(&path),
        Err(CityDbError::Json(_))
    ));
}
