// src/domain/normalize.rs

use std::collections::HashMap;

use crate::domain::listing::{ListingRecord, RawListing};

const ZIP_LEN: usize = 5;

/// Turns raw storage rows into clean listings.
///
/// Rules, in order:
/// 1. The zip code is re-derived from the last five characters of the address;
///    rows where those are not all digits are dropped.
/// 2. Rows with any other missing field (or a non-positive list price) are dropped.
/// 3. Square footage, bedrooms and ZDelta are truncated toward zero; square
///    footage must then be positive and bedrooms non-negative.
/// 4. Duplicate ids keep the last row in input order.
/// 5. Result is sorted by ZDelta, highest first. The sort is stable.
pub fn normalize_listings(raw: Vec<RawListing>) -> Vec<ListingRecord> {
    let cleaned: Vec<ListingRecord> = raw.into_iter().filter_map(clean_row).collect();

    let mut records = dedup_keep_last(cleaned);
    records.sort_by(|a, b| b.value_delta.cmp(&a.value_delta));
    records
}

/// Last five characters of the address, if they form a zip code.
pub fn derive_zip_code(address: &str) -> Option<String> {
    let trimmed = address.trim_end();
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() < ZIP_LEN {
        return None;
    }
    let tail = &chars[chars.len() - ZIP_LEN..];
    if tail.iter().all(|c| c.is_ascii_digit()) {
        Some(tail.iter().collect())
    } else {
        None
    }
}

fn clean_row(row: RawListing) -> Option<ListingRecord> {
    let address = row.address?;
    let zip_code = derive_zip_code(&address)?;

    let listed_price = row.listed_price.filter(|p| *p > 0.0)?;

    Some(ListingRecord {
        id: non_empty(row.id)?,
        address,
        zip_code,
        square_footage: truncate(row.square_footage?).filter(|n| *n > 0)?,
        bedrooms: truncate(row.bedrooms?).filter(|n| *n >= 0)?,
        home_type: non_empty(row.home_type)?,
        listed_price,
        zestimate: row.zestimate?,
        value_delta: truncate(row.value_delta?)?,
        last_updated: non_empty(row.last_updated)?,
        latitude: row.latitude?,
        longitude: row.longitude?,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn truncate(value: f64) -> Option<i64> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

fn dedup_keep_last(records: Vec<ListingRecord>) -> Vec<ListingRecord> {
    let mut last_index: HashMap<&str, usize> = HashMap::new();
    for (i, r) in records.iter().enumerate() {
        last_index.insert(r.id.as_str(), i);
    }
    let keep: Vec<bool> = records
        .iter()
        .enumerate()
        .map(|(i, r)| last_index.get(r.id.as_str()) == Some(&i))
        .collect();

    records
        .into_iter()
        .zip(keep)
        .filter_map(|(r, k)| k.then_some(r))
        .collect()
}
