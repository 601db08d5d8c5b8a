use crate::db::connection::{init_db, Database};
use crate::errors::ServerError;
use astra::{Body, Request, Response};
use rusqlite::params;
use std::io::Read;
use tempfile::TempDir;

/// A fresh database in its own temp dir, initialised with the production schema.
/// Keep the value alive for the duration of the test.
pub struct TestDb {
    pub db: Database,
    _dir: TempDir,
}

pub fn init_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("listings_v4.db");
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    TestDb { db, _dir: dir }
}

/// One scraper row; `None` stores SQL NULL.
pub struct Row<'a> {
    pub zpid: &'a str,
    pub address: Option<&'a str>,
    pub home_type: &'a str,
    pub listed_price: f64,
    pub zdelta: Option<f64>,
}

impl<'a> Row<'a> {
    pub fn new(zpid: &'a str, home_type: &'a str, listed_price: f64, zdelta: f64) -> Self {
        Row {
            zpid,
            address: Some("44 Loudoun St SW, Leesburg, VA 20175"),
            home_type,
            listed_price,
            zdelta: Some(zdelta),
        }
    }
}

pub fn insert_rows(db: &Database, rows: &[Row<'_>]) {
    db.with_conn(|conn| {
        for (i, r) in rows.iter().enumerate() {
            conn.execute(
                r#"
                INSERT INTO listings_v4 (
                    "index", zpid, Address, Zipcode, "Square Footage", Bedrooms, HomeType,
                    ListedPrice, Zestimate, ZDelta, LastUpdated, latitude, longitude
                ) VALUES (?1, ?2, ?3, NULL, 2400.0, 4.0, ?4, ?5, ?6, ?7, '2022-06-01 08:00:00', 39.1, -77.56)
                "#,
                params![
                    i as i64,
                    r.zpid,
                    r.address,
                    r.home_type,
                    r.listed_price,
                    r.zdelta.map(|d| r.listed_price + d),
                    r.zdelta,
                ],
            )?;
        }
        Ok::<_, ServerError>(())
    })
    .expect("Failed to insert rows");
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_header(uri: &str, name: &str, value: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .header(name, value)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
