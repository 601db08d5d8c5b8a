use maud::{html, Markup};

pub struct Bar<'a> {
    pub label: &'a str,
    pub value: i64,
}

/// Horizontal bar chart. `format` renders the value label of each bar.
pub fn bar_chart<F>(title: &str, subtitle: Option<&str>, color: &str, bars: &[Bar<'_>], format: F) -> Markup
where
    F: Fn(i64) -> String,
{
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0).max(1);

    html! {
        figure class="bar-chart" {
            figcaption {
                strong { (title) }
                @if let Some(sub) = subtitle {
                    br;
                    small { (sub) }
                }
            }
            @if bars.is_empty() {
                p class="empty" { "No listings" }
            }
            @for bar in bars {
                div class="bar-row" {
                    span class="bar-label" { (bar.label) }
                    span class="bar-track" {
                        span
                            class="bar"
                            style=(format!("width: {:.1}%; background: {color};", bar.value.max(0) as f64 * 100.0 / max as f64))
                        {}
                    }
                    span class="bar-value" { (format(bar.value)) }
                }
            }
        }
    }
}
