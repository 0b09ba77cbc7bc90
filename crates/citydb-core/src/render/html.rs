// crates/citydb-core/src/render/html.rs
use super::rating::MAX_STARS;
use super::view::{CityViewModel, PriceDisplay};
use crate::text::escape_html;

const PREDICT_BUTTON_STYLE: &str = "background: linear-gradient(135deg, #f6c85f, #e4b745, #d1a02a); \
color: white; border: none; border-radius: 30px; padding: 12px 28px; font-weight: 600; \
font-size: 1.05rem; cursor: pointer; box-shadow: 0 4px 8px rgba(0,0,0,0.15); \
text-decoration: none; display: inline-block; margin-top: 16px;";

/// Five star spans, the first `stars` of them with the `filled` class.
pub fn render_stars_html(stars: u8) -> String {
    let mut html = String::from(r#"<div class="price-stars">"#);
    for i in 1..=MAX_STARS {
        let class = if i <= stars { "star filled" } else { "star " };
        html.push_str(&format!(r#"<span class="{class}">★</span>"#));
    }
    html.push_str("</div>");
    html
}

/// Markup of the city info box.
///
/// Text fields are HTML-escaped; the host writes the result into its
/// display container.
pub fn render_card_html(vm: &CityViewModel) -> String {
    let (price_html, stars_html) = match &vm.price {
        PriceDisplay::Ready { text, .. } => (escape_html(text), render_stars_html(vm.stars)),
        PriceDisplay::Loading => (
            r#"<span class="spinner inline"></span>"#.to_owned(),
            r#"<div class="price-stars"><span class="spinner"></span></div>"#.to_owned(),
        ),
    };

    let city = escape_html(&vm.city);
    format!(
        r#"<div class="city-info-header"><br>
  <img src="{flag}" alt="{code}" title="{country}">
  <span style="font-size: 20px; font-weight: bold;">{city}</span>
</div>
<div style="font-size: 16px;"><br><br>
  <strong>Best time to visit:</strong> {season}<br><br>
  <strong>Avg. Airbnb price:</strong> {price_html}<br>
  <strong>Expensiveness:</strong> {stars_html}<br>
  <a href="{maps}" target="_blank" style="display:inline-block;margin-top:6px;color:#1a73e8;">📍View on Google Maps</a><br><br>
  <a href="{predict}" style="{PREDICT_BUTTON_STYLE}">Predict</a>
</div>"#,
        flag = escape_html(&vm.flag_url),
        code = escape_html(&vm.country_code),
        country = escape_html(&vm.country_name),
        season = escape_html(&vm.best_season),
        maps = escape_html(&vm.maps_url),
        predict = escape_html(&vm.predict_url),
    )
}
