//! Return on equity scorer.

use crate::bands::{Band, BandTable, Bound, Score};

/// ROE bands, in percent. 15% is the baseline.
pub const ROE_BANDS: BandTable = BandTable {
    scale: 100.0,
    bands: &[
        Band::new(Bound::AtMost(-5.01), 1, "Extremely bad"),
        Band::new(Bound::Below(0.0), 2, "Very poor"),
        Band::new(Bound::Below(5.0), 3, "Weak return"),
        Band::new(Bound::Below(10.0), 4, "Below average"),
        Band::new(Bound::Below(15.0), 5, "Average"),
        Band::new(Bound::Exactly(15.0), 6, "Good baseline"),
        Band::new(Bound::Below(25.0), 7, "Solid performance"),
        Band::new(Bound::Below(35.0), 8, "Strong"),
        Band::new(Bound::Below(45.0), 9, "Excellent"),
    ],
    fallback: Band::new(Bound::AtLeast(45.0), 10, "Exceptional"),
};

/// Score return on equity given as a fraction.
pub fn score_roe(roe: Option<f64>) -> Score {
    ROE_BANDS.score(roe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-0.1, 1, "Extremely bad")]
    #[case(-0.0501, 1, "Extremely bad")]
    #[case(-0.05, 2, "Very poor")]
    #[case(-0.01, 2, "Very poor")]
    #[case(0.0, 3, "Weak return")]
    #[case(0.05, 4, "Below average")]
    #[case(0.1, 5, "Average")]
    #[case(0.15, 6, "Good baseline")]
    #[case(0.2, 7, "Solid performance")]
    #[case(0.25, 8, "Strong")]
    #[case(0.35, 9, "Excellent")]
    #[case(0.45, 10, "Exceptional")]
    fn test_roe_bands(#[case] roe: f64, #[case] score: u8, #[case] label: &'static str) {
        assert_eq!(score_roe(Some(roe)), Score::new(score, label));
    }
}
