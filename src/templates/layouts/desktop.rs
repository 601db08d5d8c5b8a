use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2933; }
header { display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); }
.page { display: grid; grid-template-columns: 320px 1fr; gap: 2rem; padding: 1.5rem; }
aside { font-size: 0.9rem; color: #444; }
.info { background: #e8f1fb; padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.success { background: #e7f6ec; padding: 0.75rem 1rem; border-radius: 6px; }
.row { display: grid; grid-auto-flow: column; grid-auto-columns: 1fr; gap: 1.5rem; }
.metric-label { font-size: 0.9rem; color: #555; }
.metric-value { font-size: 2rem; }
.bar-row { display: grid; grid-template-columns: 10rem 1fr 5rem; align-items: center; gap: 0.5rem; margin: 0.25rem 0; }
.bar-track { background: #eef0f2; height: 1.1rem; display: block; }
.bar { display: block; height: 100%; }
.bar-value { text-align: right; font-variant-numeric: tabular-nums; }
.scatter-map { width: 100%; height: auto; border: 1px solid #ddd; }
.table-scroll { overflow-x: auto; max-height: 32rem; }
table { border-collapse: collapse; font-size: 0.85rem; }
th, td { border-bottom: 1px solid #eee; padding: 0.25rem 0.5rem; white-space: nowrap; }
td.num { text-align: right; }
.caption { font-size: 0.85rem; color: #666; }
.downloads { display: flex; flex-direction: column; align-items: center; gap: 0.75rem; margin: 2rem 0; }
.htmx-indicator { display: none; }
"#;

pub fn desktop_layout(title: &str, sidebar: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header {
                    strong { "ZDelta Dashboard" }
                    nav {
                        a href="/" { "Dashboard" }
                        " · "
                        a href="/api/map-points" { "Map data (JSON)" }
                    }
                }
                div class="page" {
                    aside { (sidebar) }
                    main { (content) }
                }
            }
        }
    }
}
