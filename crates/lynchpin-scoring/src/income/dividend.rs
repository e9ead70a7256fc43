//! Dividend yield scorer.
//!
//! Unlike the growth and quality scorers, this one takes the yield already
//! expressed in percent (1.25 for 1.25%). Snapshots store yields as fractions,
//! so callers convert first; see [`crate::scorecard::ScoreCard::from_snapshot`].

use crate::bands::{Band, BandTable, Bound, Score};

/// Dividend yield bands, in percent.
pub const DIVIDEND_YIELD_BANDS: BandTable = BandTable {
    scale: 1.0,
    bands: &[
        Band::new(Bound::Exactly(0.0), 1, "No dividend"),
        Band::new(Bound::AtMost(0.24), 2, "Very low"),
        Band::new(Bound::AtMost(0.49), 3, "Low"),
        Band::new(Bound::AtMost(0.99), 4, "Mild"),
        Band::new(Bound::AtMost(1.24), 5, "Okay"),
        Band::new(Bound::Exactly(1.25), 6, "Baseline"),
        Band::new(Bound::AtMost(1.5), 7, "Decent"),
        Band::new(Bound::AtMost(2.0), 8, "Good"),
        Band::new(Bound::AtMost(2.5), 9, "Very good"),
    ],
    fallback: Band::new(Bound::Above(2.5), 10, "High yield"),
};

/// Score a dividend yield given in percent.
pub fn score_dividend_yield(yield_percent: Option<f64>) -> Score {
    DIVIDEND_YIELD_BANDS.score(yield_percent)
}
