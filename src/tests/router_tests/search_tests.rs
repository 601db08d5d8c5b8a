use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, get_with_header, init_test_db, insert_rows, Row};

fn seed(t: &crate::tests::utils::TestDb) {
    // deltas -100..300 -> scores 1,2,2,3,4,5,5,5
    insert_rows(
        &t.db,
        &[
            Row::new("a", "CONDO", 400_000.0, -100.0),
            Row::new("b", "TOWNHOUSE", 400_000.0, 0.0),
            Row::new("c", "CONDO", 400_000.0, 50.0),
            Row::new("d", "SINGLE_FAMILY", 400_000.0, 100.0),
            Row::new("e", "TOWNHOUSE", 400_000.0, 150.0),
            Row::new("f", "CONDO", 400_000.0, 200.0),
            Row::new("g", "SINGLE_FAMILY", 400_000.0, 250.0),
            Row::new("h", "CONDO", 400_000.0, 300.0),
        ],
    );
}

#[test]
fn search_without_submit_shows_no_results() {
    let t = init_test_db();
    seed(&t);
    let body = body_string(handle(get("/search"), &t.db).unwrap());
    assert!(!body.contains("Returned"));
}

#[test]
fn empty_selection_returns_zero() {
    let t = init_test_db();
    seed(&t);
    let body = body_string(handle(get("/search?submitted=1&home_type=CONDO"), &t.db).unwrap());
    assert!(body.contains("Returned 0 Listings"));
}

#[test]
fn htmx_search_returns_fragment() {
    let t = init_test_db();
    seed(&t);
    let resp = handle(
        get_with_header(
            "/search?submitted=1&home_type=CONDO&score=5&score=1",
            "HX-Request",
            "true",
        ),
        &t.db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Returned 3 Listings"));
    assert!(!body.contains("<html"));
}

#[test]
fn map_points_default_to_every_listing() {
    let t = init_test_db();
    seed(&t);
    let resp = handle(get("/api/map-points"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let points: Vec<serde_json::Value> = serde_json::from_str(&body_string(resp)).unwrap();
    let scores: Vec<u64> = points
        .iter()
        .map(|p| p["score"].as_u64().unwrap())
        .collect();
    assert_eq!(scores, vec![5, 5, 5, 4, 3, 2, 2, 1]);
    assert_eq!(points[0]["home_type"], "CONDO");
    assert_eq!(points[0]["value_delta"], 300);
}

#[test]
fn map_points_respect_selection() {
    let t = init_test_db();
    seed(&t);
    let body = body_string(
        handle(get("/api/map-points?submitted=1&home_type=TOWNHOUSE&score=2&score=4"), &t.db)
            .unwrap(),
    );
    let points: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(points.len(), 2);
}

#[test]
fn bad_score_is_bad_request() {
    let t = init_test_db();
    let err = handle(get("/search?submitted=1&score=9"), &t.db).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}
