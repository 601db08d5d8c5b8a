use crate::db::Database;
use crate::domain::listing::{ListingRecord, MapPoint, Score};
use crate::domain::{DatasetSnapshot, Selection};
use crate::errors::ServerError;
use crate::responses::{
    csv_response, html_response, json_response, not_modified_response, xlsx_response, ResultResp,
};
use crate::spreadsheets::{content_fingerprint, export_listings_csv, export_listings_xlsx};
use crate::templates::pages::{dashboard_page, search_results, DashboardVm};
use astra::Request;
use tracing::debug;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let snapshot = DatasetSnapshot::load(db)?;
            html_response(dashboard_page(&DashboardVm::new(&snapshot, None)))
        }

        ("GET", "/search") => {
            let submitted = parse_selection(req.uri().query())?;
            let snapshot = DatasetSnapshot::load(db)?;
            match submitted {
                Some(selection) if is_htmx(&req) => {
                    let results = snapshot.search(&selection);
                    debug!(matched = results.len(), "search");
                    html_response(search_results(&results))
                }
                submitted => html_response(dashboard_page(&DashboardVm::new(&snapshot, submitted))),
            }
        }

        ("GET", "/api/map-points") => {
            let submitted = parse_selection(req.uri().query())?;
            let snapshot = DatasetSnapshot::load(db)?;
            let points: Vec<MapPoint<'_>> = match &submitted {
                Some(selection) => snapshot.search(selection).into_iter().map(MapPoint::from).collect(),
                None => snapshot.scored().iter().map(MapPoint::from).collect(),
            };
            json_response(&points)
        }

        ("GET", "/download/all_listings.csv") => {
            let snapshot = DatasetSnapshot::load(db)?;
            csv_download(&req, snapshot.listings(), "all_listings.csv")
        }
        ("GET", "/download/uv_listings.csv") => {
            let snapshot = DatasetSnapshot::load(db)?;
            csv_download(&req, snapshot.undervalued(), "uv_listings.csv")
        }
        ("GET", "/download/all_listings.xlsx") => {
            let snapshot = DatasetSnapshot::load(db)?;
            let buffer = export_listings_xlsx(snapshot.listings(), "All Listings")?;
            xlsx_response(buffer, "all_listings.xlsx")
        }
        ("GET", "/download/uv_listings.xlsx") => {
            let snapshot = DatasetSnapshot::load(db)?;
            let buffer = export_listings_xlsx(snapshot.undervalued(), "Undervalued Listings")?;
            xlsx_response(buffer, "uv_listings.xlsx")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn csv_download<'a, I>(req: &Request, listings: I, filename: &str) -> ResultResp
where
    I: IntoIterator<Item = &'a ListingRecord>,
{
    let buffer = export_listings_csv(listings)?;
    let etag = content_fingerprint(&buffer);

    let cached = req
        .headers()
        .get("If-None-Match")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| etag_matches(v, &etag));
    if cached {
        return not_modified_response(&etag);
    }

    csv_response(buffer, filename, &etag)
}

/// `If-None-Match` uses weak comparison: `W/` prefixes are ignored and `*` matches anything.
fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match.split(',').map(str::trim).any(|tag| {
        tag == "*" || tag.strip_prefix("W/").unwrap_or(tag) == etag.strip_prefix("W/").unwrap_or(etag)
    })
}

fn is_htmx(req: &Request) -> bool {
    req.headers().contains_key("HX-Request")
}

/// Search form state from the query string. `None` until the form has been
/// submitted; after that the repeated `home_type` / `score` params are the
/// whole selection, so leaving a multi-select empty selects nothing.
fn parse_selection(query: Option<&str>) -> Result<Option<Selection>, ServerError> {
    let Some(query) = query else {
        return Ok(None);
    };

    let mut submitted = false;
    let mut selection = Selection::default();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "submitted" => submitted = true,
            "home_type" => {
                selection.home_types.insert(value.into_owned());
            }
            "score" => {
                let score = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(Score::new)
                    .ok_or_else(|| ServerError::BadRequest(format!("Invalid ZDelta score: {value}")))?;
                selection.scores.insert(score);
            }
            _ => {}
        }
    }

    Ok(submitted.then_some(selection))
}
