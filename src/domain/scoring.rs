// src/domain/scoring.rs

use crate::config::SCORE_BANDS;
use crate::domain::listing::{ListingRecord, Score, ScoredListing};

/// Upper edges of the first three non-negative bands; `z1 <= z2 <= z3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBands {
    pub z1: i64,
    pub z2: i64,
    pub z3: i64,
}

impl ScoreBands {
    /// Cut points over the non-negative ZDeltas. With `n` of them sorted
    /// ascending, cut `i` is the value at index `i * (n / 4)`.
    ///
    /// Returns `None` when there are fewer than four non-negative deltas;
    /// every non-negative listing then scores 2.
    pub fn from_deltas<I>(deltas: I) -> Option<ScoreBands>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut non_negative: Vec<i64> = deltas.into_iter().filter(|d| *d >= 0).collect();
        let step = non_negative.len() / SCORE_BANDS;
        if step == 0 {
            return None;
        }
        non_negative.sort_unstable();

        Some(ScoreBands {
            z1: non_negative[step],
            z2: non_negative[2 * step],
            z3: non_negative[3 * step],
        })
    }

    /// Score for a single delta. Ties at a cut go to the lower band.
    pub fn score(&self, delta: i64) -> Score {
        match delta {
            d if d < 0 => Score::NEGATIVE,
            d if d <= self.z1 => Score::LOW,
            d if d <= self.z2 => Score::MID,
            d if d <= self.z3 => Score::HIGH,
            _ => Score::TOP,
        }
    }
}

/// Score for a delta given optional bands; without bands (degenerate input)
/// every non-negative delta lands in the lowest non-negative band.
pub fn score_delta(bands: Option<&ScoreBands>, delta: i64) -> Score {
    match bands {
        Some(b) => b.score(delta),
        None if delta < 0 => Score::NEGATIVE,
        None => Score::LOW,
    }
}

/// Scores every listing against bands computed from the same set.
/// Input order is preserved.
pub fn score_listings(listings: &[ListingRecord]) -> (Option<ScoreBands>, Vec<ScoredListing>) {
    let bands = ScoreBands::from_deltas(listings.iter().map(|l| l.value_delta));

    let scored = listings
        .iter()
        .map(|l| ScoredListing {
            listing: l.clone(),
            score: score_delta(bands.as_ref(), l.value_delta),
        })
        .collect();

    (bands, scored)
}
