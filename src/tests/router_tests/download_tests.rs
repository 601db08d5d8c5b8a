use crate::router::handle;
use crate::spreadsheets::parse_listings_csv;
use crate::tests::utils::{body_string, get, get_with_header, init_test_db, insert_rows, Row};

fn seed(t: &crate::tests::utils::TestDb) {
    insert_rows(
        &t.db,
        &[
            Row::new("1", "SINGLE_FAMILY", 500_000.0, 50_000.0),
            Row::new("2", "SINGLE_FAMILY", 500_000.0, 49_999.0),
            Row::new("3", "CONDO", 250_000.0, -5_000.0),
        ],
    );
}

#[test]
fn all_listings_csv_download() {
    let t = init_test_db();
    seed(&t);

    let resp = handle(get("/download/all_listings.csv"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"all_listings.csv\""
    );
    assert!(resp.headers().contains_key("ETag"));

    let body = body_string(resp);
    assert!(body.starts_with("id,address,zip_code,"));
    let records = parse_listings_csv(body.as_bytes()).unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(records[0].zip_code, "20175");
}

#[test]
fn undervalued_csv_uses_ten_percent_cut() {
    let t = init_test_db();
    seed(&t);

    let body = body_string(handle(get("/download/uv_listings.csv"), &t.db).unwrap());
    let records = parse_listings_csv(body.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1");
}

#[test]
fn matching_etag_is_not_modified() {
    let t = init_test_db();
    seed(&t);

    let first = handle(get("/download/all_listings.csv"), &t.db).unwrap();
    let etag = first
        .headers()
        .get("ETag")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let again = handle(
        get_with_header("/download/all_listings.csv", "If-None-Match", &etag),
        &t.db,
    )
    .unwrap();
    assert_eq!(again.status(), 304);
    assert!(body_string(again).is_empty());

    insert_rows(&t.db, &[Row::new("4", "CONDO", 100_000.0, 1.0)]);
    let changed = handle(
        get_with_header("/download/all_listings.csv", "If-None-Match", &etag),
        &t.db,
    )
    .unwrap();
    assert_eq!(changed.status(), 200);
}

#[test]
fn weak_or_wildcard_if_none_match_is_not_modified() {
    let t = init_test_db();
    seed(&t);

    let first = handle(get("/download/uv_listings.csv"), &t.db).unwrap();
    let etag = first
        .headers()
        .get("ETag")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    for header in [format!("W/{etag}"), "*".to_string()] {
        let resp = handle(
            get_with_header("/download/uv_listings.csv", "If-None-Match", &header),
            &t.db,
        )
        .unwrap();
        assert_eq!(resp.status(), 304, "If-None-Match: {header}");
    }
}

#[test]
fn xlsx_download() {
    let t = init_test_db();
    seed(&t);

    let resp = handle(get("/download/uv_listings.xlsx"), &t.db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}
