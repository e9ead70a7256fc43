//! Enterprise value to EBITDA scorer.

use crate::bands::{Band, BandTable, Bound, Score};

/// EV/EBITDA bands.
pub const EV_EBITDA_BANDS: BandTable = BandTable {
    scale: 1.0,
    bands: &[
        Band::new(
            Bound::AtMost(6.0),
            10,
            "Very low - undervalued (or risk of weak outlook)",
        ),
        Band::new(Bound::AtMost(8.0), 9, "Low - potentially undervalued"),
        Band::new(Bound::AtMost(10.0), 8, "Reasonable - average"),
        Band::new(Bound::AtMost(12.0), 7, "Slightly high"),
        Band::new(Bound::AtMost(15.0), 5, "High - potentially overvalued"),
        Band::new(Bound::AtMost(18.0), 3, "Very high"),
    ],
    fallback: Band::new(Bound::Above(18.0), 1, "Extremely high - rich valuation"),
};

/// Score an EV/EBITDA multiple.
pub fn score_ev_ebitda(ev_ebitda: Option<f64>) -> Score {
    EV_EBITDA_BANDS.score(ev_ebitda)
}
