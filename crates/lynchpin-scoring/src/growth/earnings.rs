//! Earnings growth scorer.
//!
//! Takes growth as a fraction (0.12 for 12%) and bands it in percent.

use crate::bands::{Band, BandTable, Bound, Score};

/// Earnings growth bands, in percent.
pub const EARNINGS_GROWTH_BANDS: BandTable = BandTable {
    scale: 100.0,
    bands: &[
        Band::new(Bound::AtMost(-10.01), 1, "Strongly negative"),
        Band::new(Bound::AtMost(-5.0), 2, "Very weak"),
        Band::new(Bound::Below(0.0), 3, "Weak"),
        Band::new(Bound::Below(5.0), 4, "Low growth"),
        Band::new(Bound::Below(10.0), 5, "Modest growth"),
        Band::new(Bound::Exactly(10.0), 6, "Good baseline"),
        Band::new(Bound::Below(20.0), 7, "Strong growth"),
        Band::new(Bound::Below(30.0), 8, "Very strong growth"),
        Band::new(Bound::Below(40.0), 9, "Excellent"),
    ],
    fallback: Band::new(Bound::AtLeast(40.0), 10, "Hyper growth"),
};

/// Score an earnings growth rate given as a fraction.
pub fn score_earnings_growth(growth: Option<f64>) -> Score {
    EARNINGS_GROWTH_BANDS.score(growth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-0.5, 1, "Strongly negative")]
    #[case(-0.1001, 1, "Strongly negative")]
    #[case(-0.1, 2, "Very weak")]
    #[case(-0.05, 2, "Very weak")]
    #[case(-0.01, 3, "Weak")]
    #[case(0.0, 4, "Low growth")]
    #[case(0.05, 5, "Modest growth")]
    #[case(0.0999, 5, "Modest growth")]
    #[case(0.1, 6, "Good baseline")]
    #[case(0.12, 7, "Strong growth")]
    #[case(0.2, 8, "Very strong growth")]
    #[case(0.3, 9, "Excellent")]
    #[case(0.4, 10, "Hyper growth")]
    #[case(2.5, 10, "Hyper growth")]
    fn test_earnings_growth_bands(#[case] growth: f64, #[case] score: u8, #[case] label: &'static str) {
        assert_eq!(score_earnings_growth(Some(growth)), Score::new(score, label));
    }

    #[test]
    fn test_earnings_growth_missing() {
        assert_eq!(score_earnings_growth(None), Score::NOT_AVAILABLE);
    }
}
