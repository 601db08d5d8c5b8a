use maud::{html, Markup};

pub mod bar_chart;
pub mod error;
pub mod format;
pub mod listings_table;
pub mod metric;
pub mod scatter_map;

pub use bar_chart::{bar_chart, Bar};
pub use error::error_page;
pub use listings_table::listings_table;
pub use metric::metric;
pub use scatter_map::{scatter_map, PointStyle};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h4 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
