use rusqlite::types::ValueRef;
use rusqlite::Row;
use tracing::debug;

use crate::db::connection::Database;
use crate::domain::listing::RawListing;
use crate::errors::ServerError;

const SQL_SELECT_LISTINGS: &str = include_str!("../../sql/select_listings.sql");

/// Read every row of the listings table as-is. Nothing is validated here;
/// the normalizer decides what survives.
pub fn load_raw_listings(db: &Database) -> Result<Vec<RawListing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(SQL_SELECT_LISTINGS)
            .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

        let rows = stmt
            .query_map([], raw_listing_from_row)
            .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(format!("Row read failed: {e}")))?);
        }

        debug!(rows = out.len(), "loaded raw listings");
        Ok(out)
    })
}

fn raw_listing_from_row(row: &Row<'_>) -> rusqlite::Result<RawListing> {
    Ok(RawListing {
        id: text_at(row, 0)?,
        address: text_at(row, 1)?,
        square_footage: number_at(row, 2)?,
        bedrooms: number_at(row, 3)?,
        home_type: text_at(row, 4)?,
        listed_price: number_at(row, 5)?,
        zestimate: number_at(row, 6)?,
        value_delta: number_at(row, 7)?,
        last_updated: text_at(row, 8)?,
        latitude: number_at(row, 9)?,
        longitude: number_at(row, 10)?,
    })
}

fn text_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(value_as_text(row.get_ref(idx)?))
}

fn number_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<f64>> {
    Ok(value_as_number(row.get_ref(idx)?))
}

/// Text view of a cell. Integral REALs print without a fraction so an id
/// stored as `2077.0` reads back as `2077`.
pub(crate) fn value_as_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            Some(format!("{}", f as i64))
        }
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => std::str::from_utf8(t).ok().map(str::to_string),
        ValueRef::Blob(_) => None,
    }
}

/// Numeric view of a cell. Numbers stored as text are parsed; anything else is missing.
pub(crate) fn value_as_number(value: ValueRef<'_>) -> Option<f64> {
    let n = match value {
        ValueRef::Integer(i) => i as f64,
        ValueRef::Real(f) => f,
        ValueRef::Text(t) => std::str::from_utf8(t).ok()?.trim().parse::<f64>().ok()?,
        ValueRef::Null | ValueRef::Blob(_) => return None,
    };
    n.is_finite().then_some(n)
}
