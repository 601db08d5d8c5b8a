use maud::{html, Markup};

pub fn metric(label: &str, value: &str) -> Markup {
    html! {
        div class="metric" {
            div class="metric-label" { (label) }
            div class="metric-value" { (value) }
        }
    }
}
