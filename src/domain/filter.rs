use std::collections::HashSet;

use crate::config::UNDERVALUED_PERCENT;
use crate::domain::listing::{ListingRecord, Score, ScoredListing};

/// What the search form selected. An empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub home_types: HashSet<String>,
    pub scores: HashSet<Score>,
}

impl Selection {
    pub fn matches(&self, listing: &ScoredListing) -> bool {
        self.home_types.contains(&listing.listing.home_type) && self.scores.contains(&listing.score)
    }
}

/// Listings whose home type and score are both selected, in input order.
pub fn filter_scored<'a>(listings: &'a [ScoredListing], selection: &Selection) -> Vec<&'a ScoredListing> {
    listings.iter().filter(|l| selection.matches(l)).collect()
}

/// ZDelta is at least 10% of the list price. Compared without dividing so
/// the boundary is exact.
pub fn is_undervalued(listing: &ListingRecord) -> bool {
    (listing.value_delta as f64) * 100.0 >= listing.listed_price * UNDERVALUED_PERCENT as f64
}

pub fn undervalued(listings: &[ListingRecord]) -> Vec<&ListingRecord> {
    listings.iter().filter(|l| is_undervalued(l)).collect()
}
