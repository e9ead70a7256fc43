//! Price to book scorer.
//!
//! A P/B between 1 and 2 is generally fair; above 10 is usually expensive,
//! though asset-light growth companies routinely sit above 3.

use crate::bands::{Band, BandTable, Bound, Score};

/// P/B bands.
pub const PB_BANDS: BandTable = BandTable {
    scale: 1.0,
    bands: &[
        Band::new(Bound::AtMost(1.0), 10, "Deep value"),
        Band::new(Bound::Below(2.0), 9, "Undervalued"),
        Band::new(Bound::Below(3.0), 8, "Fair valuation (ideal)"),
        Band::new(Bound::Below(4.0), 7, "Slightly overvalued"),
        Band::new(Bound::Below(6.0), 6, "Mildly expensive"),
        Band::new(Bound::Below(8.0), 5, "Expensive"),
        Band::new(Bound::Below(10.0), 3, "Very expensive"),
    ],
    fallback: Band::new(Bound::AtLeast(10.0), 1, "Extremely overvalued"),
};

/// Score a price-to-book ratio.
pub fn score_pb(pb: Option<f64>) -> Score {
    PB_BANDS.score(pb)
}
