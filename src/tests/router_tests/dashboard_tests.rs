// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, insert_rows, Row};

#[test]
fn empty_database_renders_empty_dashboard() {
    let t = init_test_db();

    let resp = handle(get("/"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Zillow Zestimate Analysis"));
    assert!(body.contains("Dataset Last Updated: n/a"));
    assert!(body.contains("Number of Records: 0"));
    assert!(body.contains("No listings"));
}

#[test]
fn dashboard_shows_metrics_and_tables() {
    let t = init_test_db();
    insert_rows(
        &t.db,
        &[
            Row::new("1", "SINGLE_FAMILY", 500_000.0, 75_000.0),
            Row::new("2", "TOWNHOUSE", 400_000.0, -2_000.0),
            Row::new("3", "CONDO", 300_000.0, 1_000.0),
        ],
    );

    let body = body_string(handle(get("/"), &t.db).unwrap());
    assert!(body.contains("Dataset Last Updated: June 1, 2022 08:00"));
    assert!(body.contains("$75000"));
    assert!(body.contains("Number of Records: 3"));
    // only the 15% listing is undervalued
    assert!(body.contains("Number of Records: 1"));
    assert!(body.contains("Count of Listings by Home Type"));
    assert!(body.contains("$500k"));
}

#[test]
fn malformed_rows_are_silently_excluded() {
    let t = init_test_db();
    let mut no_zip = Row::new("bad-zip", "CONDO", 300_000.0, 1.0);
    no_zip.address = Some("1 Nowhere Ln, Sterling, VA");
    let mut no_delta = Row::new("no-delta", "CONDO", 300_000.0, 1.0);
    no_delta.zdelta = None;
    insert_rows(
        &t.db,
        &[no_zip, no_delta, Row::new("ok", "CONDO", 300_000.0, 1.0)],
    );

    let resp = handle(get("/"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Number of Records: 1"));
    assert!(!body.contains("bad-zip"));
    assert!(!body.contains("no-delta"));
}

#[test]
fn unknown_route_is_not_found() {
    let t = init_test_db();
    let err = handle(get("/nope"), &t.db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_to_response(&err).status(), 404);
}

#[test]
fn missing_table_is_a_load_failure() {
    let t = init_test_db();
    t.db.with_conn(|conn| {
        conn.execute_batch("DROP TABLE listings_v4")?;
        Ok(())
    })
    .unwrap();

    let err = handle(get("/"), &t.db).unwrap_err();
    assert!(matches!(err, ServerError::DbError(_)));

    let resp = error_to_response(&err);
    assert_eq!(resp.status(), 500);
    let body = body_string(resp);
    assert!(body.contains("Error 500"));
    assert!(!body.contains("Metrics"));
}
