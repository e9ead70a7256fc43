//! Trailing P/E scorer.

use crate::bands::{Band, BandTable, Bound, Score};

/// P/E bands. A P/E of exactly 23 is the rubric's "Average" anchor.
pub const PE_BANDS: BandTable = BandTable {
    scale: 1.0,
    bands: &[
        Band::new(Bound::AtLeast(64.0), 1, "Very high (Overvalued)"),
        Band::new(Bound::AtLeast(53.0), 2, "Very high"),
        Band::new(Bound::AtLeast(43.0), 3, "High"),
        Band::new(Bound::AtLeast(33.0), 4, "Moderately high"),
        Band::new(Bound::Above(23.0), 5, "Fair"),
        Band::new(Bound::Exactly(23.0), 6, "Average"),
        Band::new(Bound::Above(22.98), 7, "Slightly undervalued"),
        Band::new(Bound::AtLeast(17.99), 8, "Undervalued"),
        Band::new(Bound::AtLeast(12.99), 9, "Very undervalued"),
    ],
    fallback: Band::new(Bound::Below(12.99), 10, "Extremely undervalued"),
};

/// Score a trailing P/E ratio.
pub fn score_pe(pe: Option<f64>) -> Score {
    PE_BANDS.score(pe)
}
