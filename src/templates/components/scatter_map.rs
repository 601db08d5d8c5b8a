// src/templates/components/scatter_map.rs

use maud::{html, Markup};

use crate::config::MAP_CENTER;
use crate::domain::listing::{MapPoint, Score};
use crate::templates::components::format::{dollars, thousands};

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 600.0;
const PADDING: f64 = 24.0;
/// Smallest span (degrees) shown, so one listing doesn't fill the map.
const MIN_SPAN: f64 = 0.05;

/// How points are drawn.
pub enum PointStyle {
    /// Red-to-green by score, radius grows with score.
    ByScore,
    /// One colour and size for every point.
    Uniform { color: &'static str, radius: f64 },
}

/// Red-yellow-green ramp, 1 = red.
pub fn score_color(score: Score) -> &'static str {
    match score.value() {
        1 => "#d73027",
        2 => "#fc8d59",
        3 => "#fee08b",
        4 => "#91cf60",
        _ => "#1a9850",
    }
}

struct Projection {
    min_lon: f64,
    max_lat: f64,
    scale_x: f64,
    scale_y: f64,
}

impl Projection {
    /// Equirectangular fit of all points into the view box, keeping aspect
    /// ratio at the data's mean latitude.
    fn fit(points: &[MapPoint<'_>]) -> Projection {
        let (mut min_lat, mut max_lat, mut min_lon, mut max_lon) =
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lon = min_lon.min(p.longitude);
            max_lon = max_lon.max(p.longitude);
        }
        if points.is_empty() {
            (min_lat, max_lat) = (MAP_CENTER.0, MAP_CENTER.0);
            (min_lon, max_lon) = (MAP_CENTER.1, MAP_CENTER.1);
        }

        let mid_lat = (min_lat + max_lat) / 2.0;
        let mid_lon = (min_lon + max_lon) / 2.0;
        let lat_span = (max_lat - min_lat).max(MIN_SPAN);
        let lon_span = (max_lon - min_lon).max(MIN_SPAN);

        let cos = mid_lat.to_radians().cos().abs().max(0.01);
        let usable_w = WIDTH - 2.0 * PADDING;
        let usable_h = HEIGHT - 2.0 * PADDING;
        let scale = (usable_w / (lon_span * cos)).min(usable_h / lat_span);

        let scale_x = scale * cos;
        let scale_y = scale;
        Projection {
            min_lon: mid_lon - (WIDTH / 2.0) / scale_x,
            max_lat: mid_lat + (HEIGHT / 2.0) / scale_y,
            scale_x,
            scale_y,
        }
    }

    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        ((lon - self.min_lon) * self.scale_x, (self.max_lat - lat) * self.scale_y)
    }
}

pub fn scatter_map(points: &[MapPoint<'_>], style: PointStyle) -> Markup {
    let projection = Projection::fit(points);

    html! {
        svg
            class="scatter-map"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
            role="img"
        {
            rect width="100%" height="100%" fill="#f4f4f2" {}
            @if points.is_empty() {
                text x=(WIDTH / 2.0) y=(HEIGHT / 2.0) text-anchor="middle" fill="#888" { "No listings" }
            }
            @for p in points {
                @let (x, y) = projection.project(p.latitude, p.longitude);
                @let (fill, r) = match style {
                    PointStyle::ByScore => (score_color(p.score), 2.0 * p.score.value() as f64),
                    PointStyle::Uniform { color, radius } => (color, radius),
                };
                circle
                    cx=(format!("{x:.1}"))
                    cy=(format!("{y:.1}"))
                    r=(r)
                    fill=(fill)
                    fill-opacity="0.8"
                    stroke="#333"
                    stroke-width="0.5"
                {
                    title { (hover_text(p)) }
                }
            }
        }
    }
}

fn hover_text(p: &MapPoint<'_>) -> String {
    format!(
        "{}\nListedPrice: {}\nZestimate: {}\nZDelta: ${}\nHomeType: {}",
        p.address,
        dollars(p.listed_price),
        dollars(p.zestimate),
        thousands(p.value_delta),
        p.home_type
    )
}
