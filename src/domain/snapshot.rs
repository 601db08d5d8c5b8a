// src/domain/snapshot.rs

use chrono::NaiveDateTime;
use tracing::info;

use crate::db::connection::Database;
use crate::db::listings::load_raw_listings;
use crate::domain::aggregate::{average_price_by_type, count_by_type, TypeAveragePrice, TypeCount};
use crate::domain::filter::{filter_scored, undervalued, Selection};
use crate::domain::listing::{ListingRecord, RawListing, Score, ScoredListing};
use crate::domain::normalize::normalize_listings;
use crate::domain::scoring::{score_listings, ScoreBands};
use crate::errors::ServerError;

/// The three headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_listings: usize,
    pub undervalued_listings: usize,
    pub highest_delta: i64,
}

/// One load of the listings table with every derived field computed.
/// Built once per request and passed down read-only; a reload means a new snapshot.
#[derive(Debug, Clone)]
pub struct DatasetSnapshot {
    listings: Vec<ListingRecord>,
    scored: Vec<ScoredListing>,
    bands: Option<ScoreBands>,
}

impl DatasetSnapshot {
    pub fn load(db: &Database) -> Result<Self, ServerError> {
        let raw = load_raw_listings(db)?;
        let raw_rows = raw.len();
        let snapshot = Self::from_raw(raw);
        info!(
            raw_rows,
            kept = snapshot.listings.len(),
            "listing snapshot built"
        );
        Ok(snapshot)
    }

    pub fn from_raw(raw: Vec<RawListing>) -> Self {
        let listings = normalize_listings(raw);
        let (bands, scored) = score_listings(&listings);
        Self {
            listings,
            scored,
            bands,
        }
    }

    pub fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    pub fn scored(&self) -> &[ScoredListing] {
        &self.scored
    }

    pub fn bands(&self) -> Option<&ScoreBands> {
        self.bands.as_ref()
    }

    pub fn undervalued(&self) -> Vec<&ListingRecord> {
        undervalued(&self.listings)
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics {
            total_listings: self.listings.len(),
            undervalued_listings: self.undervalued().len(),
            highest_delta: self.listings.first().map(|l| l.value_delta).unwrap_or(0),
        }
    }

    pub fn count_by_type(&self) -> Vec<TypeCount> {
        count_by_type(&self.listings)
    }

    pub fn average_price_by_type(&self) -> Vec<TypeAveragePrice> {
        average_price_by_type(&self.listings)
    }

    pub fn search(&self, selection: &Selection) -> Vec<&ScoredListing> {
        filter_scored(&self.scored, selection)
    }

    /// Home types in first-seen order, for the search form.
    pub fn home_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for l in &self.listings {
            if !seen.contains(&l.home_type.as_str()) {
                seen.push(&l.home_type);
            }
        }
        seen
    }

    /// Scores present in the data, in first-seen order.
    pub fn scores(&self) -> Vec<Score> {
        let mut seen: Vec<Score> = Vec::new();
        for s in &self.scored {
            if !seen.contains(&s.score) {
                seen.push(s.score);
            }
        }
        seen
    }

    /// Everything selected, which is what the search form starts with.
    pub fn full_selection(&self) -> Selection {
        Selection {
            home_types: self.home_types().into_iter().map(str::to_string).collect(),
            scores: self.scores().into_iter().collect(),
        }
    }

    /// `LastUpdated` of the top listing, if it reads as a timestamp.
    pub fn last_updated(&self) -> Option<LastUpdated<'_>> {
        self.listings.first().map(|l| LastUpdated::parse(&l.last_updated))
    }
}

/// Freshness stamp of the dataset as written by the scraper.
#[derive(Debug, Clone, PartialEq)]
pub enum LastUpdated<'a> {
    At(NaiveDateTime),
    Raw(&'a str),
}

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

impl<'a> LastUpdated<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(LastUpdated::At)
            .unwrap_or(LastUpdated::Raw(raw))
    }
}

impl std::fmt::Display for LastUpdated<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LastUpdated::At(ts) => write!(f, "{}", ts.format("%B %-d, %Y %H:%M")),
            LastUpdated::Raw(s) => write!(f, "{s}"),
        }
    }
}
