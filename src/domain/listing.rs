use serde::{Deserialize, Serialize};
use std::fmt;

/// A listing row exactly as it comes out of storage. Every column may be
/// missing or malformed; see [`crate::domain::normalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing {
    pub id: Option<String>,
    pub address: Option<String>,
    pub square_footage: Option<f64>,
    pub bedrooms: Option<f64>,
    pub home_type: Option<String>,
    pub listed_price: Option<f64>,
    pub zestimate: Option<f64>,
    pub value_delta: Option<f64>,
    pub last_updated: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A cleaned listing. Field order is also the CSV export column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub address: String,
    /// Five ASCII digits taken from the end of the address.
    pub zip_code: String,
    pub square_footage: i64,
    pub bedrooms: i64,
    pub home_type: String,
    pub listed_price: f64,
    pub zestimate: f64,
    /// Zestimate minus list price; positive means the estimate is above asking.
    pub value_delta: i64,
    pub last_updated: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Discrete ZDelta bucket: 1 for a negative delta, 2..=5 for the
/// quantile bands of the non-negative deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(1);
    pub const MAX: Score = Score(5);

    pub const NEGATIVE: Score = Score(1);
    pub const LOW: Score = Score(2);
    pub const MID: Score = Score(3);
    pub const HIGH: Score = Score(4);
    pub const TOP: Score = Score(5);

    pub fn new(value: u8) -> Option<Score> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(Score(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Score> {
        (Self::MIN.0..=Self::MAX.0).map(Score)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredListing {
    pub listing: ListingRecord,
    pub score: Score,
}

/// What the map needs per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint<'a> {
    pub latitude: f64,
    pub longitude: f64,
    pub score: Score,
    pub address: &'a str,
    pub listed_price: f64,
    pub zestimate: f64,
    pub value_delta: i64,
    pub home_type: &'a str,
}

impl<'a> From<&'a ScoredListing> for MapPoint<'a> {
    fn from(s: &'a ScoredListing) -> Self {
        MapPoint {
            latitude: s.listing.latitude,
            longitude: s.listing.longitude,
            score: s.score,
            address: &s.listing.address,
            listed_price: s.listing.listed_price,
            zestimate: s.listing.zestimate,
            value_delta: s.listing.value_delta,
            home_type: &s.listing.home_type,
        }
    }
}
