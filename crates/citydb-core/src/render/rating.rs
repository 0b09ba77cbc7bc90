// crates/citydb-core/src/render/rating.rs

/// Highest "expensiveness" rating.
pub const MAX_STARS: u8 = 5;

/// Star rating for a mean nightly price in EUR.
///
/// `<20 → 1, <40 → 2, <60 → 3, <80 → 4, else → 5`. A missing, `null` or
/// zero price gives `0`, meaning "no rating" rather than "cheap".
///
/// Always call this with the unconverted EUR mean.
pub fn price_to_stars(mean_eur: Option<f64>) -> u8 {
    let price = match mean_eur {
        Some(p) if p != 0.0 && !p.is_nan() => p,
        _ => return 0,
    };
    if price < 20.0 {
        1
    } else if price < 40.0 {
        2
    } else if price < 60.0 {
        3
    } else if price < 80.0 {
        4
    } else {
        MAX_STARS
    }
}
