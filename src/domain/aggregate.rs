use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::listing::ListingRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub home_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAveragePrice {
    pub home_type: String,
    /// Mean list price in thousands, truncated.
    pub average_thousands: i64,
}

/// Listings per home type, most common first. Ties are alphabetical.
pub fn count_by_type(listings: &[ListingRecord]) -> Vec<TypeCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for l in listings {
        *counts.entry(l.home_type.as_str()).or_default() += 1;
    }

    let mut out: Vec<TypeCount> = counts
        .into_iter()
        .map(|(home_type, count)| TypeCount {
            home_type: home_type.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Mean list price per home type, highest first. Ordering uses the exact
/// mean; the reported value is truncated to whole thousands afterwards.
pub fn average_price_by_type(listings: &[ListingRecord]) -> Vec<TypeAveragePrice> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for l in listings {
        let acc = sums.entry(l.home_type.as_str()).or_insert((0.0, 0));
        acc.0 += l.listed_price;
        acc.1 += 1;
    }

    let mut means: Vec<(&str, f64)> = sums
        .into_iter()
        .map(|(home_type, (sum, n))| (home_type, sum / n as f64))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));

    means
        .into_iter()
        .map(|(home_type, mean)| TypeAveragePrice {
            home_type: home_type.to_string(),
            average_thousands: (mean / 1000.0).trunc() as i64,
        })
        .collect()
}
