use crate::config::UNDERVALUED_PERCENT;
use crate::domain::listing::{MapPoint, Score, ScoredListing};
use crate::domain::{DatasetSnapshot, Selection};
use crate::templates::components::format::thousands;
use crate::templates::components::scatter_map::score_color;
use crate::templates::components::{bar_chart, card, listings_table, metric, scatter_map, Bar, PointStyle};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const SEARCH_POINT_COLOR: &str = "#097969";

pub struct DashboardVm<'a> {
    pub snapshot: &'a DatasetSnapshot,
    /// Options pre-selected in the search form.
    pub selection: Selection,
    /// `Some` once the search form has been submitted.
    pub results: Option<Vec<&'a ScoredListing>>,
}

impl<'a> DashboardVm<'a> {
    pub fn new(snapshot: &'a DatasetSnapshot, submitted: Option<Selection>) -> Self {
        match submitted {
            Some(selection) => DashboardVm {
                snapshot,
                results: Some(snapshot.search(&selection)),
                selection,
            },
            None => DashboardVm {
                snapshot,
                selection: snapshot.full_selection(),
                results: None,
            },
        }
    }
}

pub fn dashboard_page(vm: &DashboardVm<'_>) -> Markup {
    let snap = vm.snapshot;
    let freshness = snap
        .last_updated()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "n/a".to_string());

    desktop_layout(
        "Zillow Zestimate Analysis",
        about_sidebar(),
        html! {
            p class="info" { "Dataset Last Updated: " (freshness) }
            h1 { "🏠 Zillow Zestimate Analysis 🏠" }

            (metrics_row(snap))
            (charts_row(snap))

            p class="info" {}
            h4 { "Listing Locations" }
            p class="caption" {
                "All listings visualized and sized by their ZDelta; the higher the ZDelta Score, "
                "the more 'undervalued' a listing is"
            }
            @let points: Vec<MapPoint<'_>> = snap.scored().iter().map(MapPoint::from).collect();
            (scatter_map(&points, PointStyle::ByScore))
            (score_legend(snap))

            p class="info" {}
            (search_form(vm))

            (listings_table("All Listings", None, &snap.listings().iter().collect::<Vec<_>>()))
            (listings_table(
                "Undervalued Listings",
                Some("Undervalued Listings are defined as listings with a >= 10% delta in Zestimate and list price"),
                &snap.undervalued(),
            ))

            (downloads())
            p class="info" {}
        },
    )
}

fn metrics_row(snap: &DatasetSnapshot) -> Markup {
    let m = snap.metrics();
    html! {
        h4 { "Metrics" }
        div class="row" {
            (metric("# of Listings", &thousands(m.total_listings as i64)))
            (metric(
                &format!("# of Undervalued Listings (>={UNDERVALUED_PERCENT}% ZDelta)"),
                &thousands(m.undervalued_listings as i64),
            ))
            (metric("Highest ZDelta", &format!("${}", m.highest_delta)))
        }
    }
}

fn charts_row(snap: &DatasetSnapshot) -> Markup {
    let counts = snap.count_by_type();
    let count_bars: Vec<Bar<'_>> = counts
        .iter()
        .map(|c| Bar {
            label: &c.home_type,
            value: c.count as i64,
        })
        .collect();

    let averages = snap.average_price_by_type();
    let avg_bars: Vec<Bar<'_>> = averages
        .iter()
        .map(|a| Bar {
            label: &a.home_type,
            value: a.average_thousands,
        })
        .collect();

    html! {
        div class="row" {
            (card("Count of Listings by Home Type", bar_chart(
                "Number of Listings",
                None,
                "#011f4b",
                &count_bars,
                |v| v.to_string(),
            )))
            (card("Average List Price by Home Type", bar_chart(
                "Average Price",
                Some("Values in $000s"),
                "#5470c6",
                &avg_bars,
                |v| format!("${}k", thousands(v)),
            )))
        }
    }
}

fn score_legend(snap: &DatasetSnapshot) -> Markup {
    html! {
        p class="caption legend" {
            @for s in Score::all() {
                span style=(format!("color: {}", score_color(s))) { "● " }
                (s.value()) " "
            }
            @match snap.bands() {
                Some(b) => {
                    " · ZDelta cuts: $" (thousands(b.z1)) ", $" (thousands(b.z2)) ", $" (thousands(b.z3))
                }
                None => { " · fewer than four non-negative ZDeltas; all score 2" }
            }
        }
    }
}

fn search_form(vm: &DashboardVm<'_>) -> Markup {
    let snap = vm.snapshot;
    html! {
        h4 { "Search Listings" }
        form
            id="search-listings"
            action="/search"
            method="get"
            hx-get="/search"
            hx-target="#search-results"
            hx-swap="innerHTML"
        {
            input type="hidden" name="submitted" value="1";

            label for="home_type" { "Select a HomeType:" }
            select id="home_type" name="home_type" multiple title="Choose 1 or many options!" {
                @for t in snap.home_types() {
                    option value=(t) selected[vm.selection.home_types.contains(t)] { (t) }
                }
            }

            label for="score" { "Select a ZDelta Score:" }
            select id="score" name="score" multiple title="Choose 1 or many options!" {
                @for s in snap.scores() {
                    option value=(s.value()) selected[vm.selection.scores.contains(&s)] { (s.value()) }
                }
            }
            p class="caption" {
                em { "ZDelta Score" } " is labeled from 1 to 5, with 1 being the lowest and 5 being the highest"
            }

            button type="submit" { "Search!" }
        }

        div id="search-results" {
            @if let Some(results) = &vm.results {
                (search_results(results))
            }
        }
    }
}

/// The part of the page htmx swaps in after a search.
pub fn search_results(results: &[&ScoredListing]) -> Markup {
    let points: Vec<MapPoint<'_>> = results.iter().map(|s| MapPoint::from(*s)).collect();
    html! {
        p class="success" { "Returned " (results.len()) " Listings" }
        (scatter_map(&points, PointStyle::Uniform { color: SEARCH_POINT_COLOR, radius: 6.0 }))
    }
}

fn downloads() -> Markup {
    html! {
        div class="downloads" {
            a href="/download/all_listings.csv" download { "Download All Listings" }
            a href="/download/uv_listings.csv" download { "Download Undervalued Listings" }
            small {
                a href="/download/all_listings.xlsx" { "All Listings (.xlsx)" }
                " · "
                a href="/download/uv_listings.xlsx" { "Undervalued Listings (.xlsx)" }
            }
        }
    }
}

fn about_sidebar() -> Markup {
    html! {
        h2 { "About:" }
        p {
            "Welcome to the " strong { "🏠 Zillow Zestimate Analysis Tool 🏠" } ". "
            "The intent of this application is to visualize the housing market landscape in "
            "Loudoun County and Fairfax County. It also should provide insight into the delta between "
            "a property's list price and its Zestimate value to allow prospective homebuyers to browse "
            "\"undervalued\" properties."
        }
        p {
            "A "
            a href="https://www.zillow.com/z/zestimate/" { "Zestimate" }
            " is Zillow's estimate of a property's market value calculated by a proprietary algorithm. "
            "This is different from a home's listed sales price."
        }
        h2 { "Data:" }
        p {
            "The dataset presented only includes " strong { "homes for sale" } " within "
            strong { "Loudoun County and Fairfax County zipcodes that have a Zestimate" } ". "
            "Some homes for sale do not have a Zestimate; these homes were removed from the dataset."
        }
        h2 { "Zestimate Accuracy:" }
        p {
            "There is much speculation on the accuracy of a home's Zestimate. Zillow publishes accuracy "
            "statistics of active listings by metro area, state, and nationally."
        }
        p {
            em { "As of June 1st, 2022:" }
        }
        p {
            "Loudoun County has a 1% median error rate with 96.7% of listings being within 5% of the "
            "sales price for on-market homes."
        }
        p {
            "Fairfax County has a 1.1% median error rate with 95.2% of listings being within 5% of the "
            "sales price for on-market homes."
        }
    }
}
