//! Profit margin scorer.

use crate::bands::{Band, BandTable, Bound, Score};

/// Profit margin bands, in percent.
pub const PROFIT_MARGIN_BANDS: BandTable = BandTable {
    scale: 100.0,
    bands: &[
        Band::new(Bound::AtMost(-10.01), 1, "Severe loss"),
        Band::new(Bound::AtMost(-5.0), 2, "Very poor"),
        Band::new(Bound::Below(0.0), 3, "Negative margin"),
        Band::new(Bound::Below(5.0), 4, "Very low margin"),
        Band::new(Bound::Below(10.0), 5, "Low margin"),
        Band::new(Bound::Exactly(10.0), 6, "Average"),
        Band::new(Bound::Below(20.0), 7, "Moderate"),
        Band::new(Bound::Below(30.0), 8, "Good"),
        Band::new(Bound::Below(40.0), 9, "Excellent"),
    ],
    fallback: Band::new(Bound::AtLeast(40.0), 10, "Outstanding"),
};

/// Score a profit margin given as a fraction.
pub fn score_profit_margin(margin: Option<f64>) -> Score {
    PROFIT_MARGIN_BANDS.score(margin)
}
