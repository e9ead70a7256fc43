//! Price to sales scorer.

use crate::bands::{Band, BandTable, Bound, Score};

/// P/S bands. Lower is better; sector context is left to the reader.
pub const PS_BANDS: BandTable = BandTable {
    scale: 1.0,
    bands: &[
        Band::new(Bound::AtMost(0.5), 10, "Extremely undervalued"),
        Band::new(Bound::AtMost(1.0), 9, "Undervalued"),
        Band::new(Bound::AtMost(1.5), 8, "Fairly valued"),
        Band::new(Bound::AtMost(2.0), 7, "Slightly high"),
        Band::new(Bound::AtMost(3.0), 6, "Expensive"),
        Band::new(Bound::AtMost(5.0), 4, "Overvalued"),
        Band::new(Bound::AtMost(8.0), 2, "Very overvalued"),
    ],
    fallback: Band::new(Bound::Above(8.0), 1, "Extremely overvalued / hype"),
};

/// Score a price-to-sales ratio.
pub fn score_ps(ps: Option<f64>) -> Score {
    PS_BANDS.score(ps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, 10)]
    #[case(0.51, 9)]
    #[case(1.0, 9)]
    #[case(1.5, 8)]
    #[case(2.0, 7)]
    #[case(3.0, 6)]
    #[case(5.0, 4)]
    #[case(8.0, 2)]
    #[case(8.01, 1)]
    fn test_ps_bands(#[case] ps: f64, #[case] score: u8) {
        assert_eq!(score_ps(Some(ps)).value, Some(score));
    }

    #[test]
    fn test_ps_hype_label() {
        assert_eq!(score_ps(Some(25.0)).label, "Extremely overvalued / hype");
    }
}
