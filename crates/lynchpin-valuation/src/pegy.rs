//! PEG and PEGY ratios.
//!
//! PEGY divides P/E by earnings growth plus dividend yield, both in percent.
//! Without a dividend it degrades to plain PEG. Growth here is quarterly
//! year-over-year growth, which Yahoo reports far more often than annual.

use lynchpin_data::{FinancialSnapshot, nonzero};
use serde::Serialize;
use std::fmt;

/// Which ratio was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PegKind {
    /// P/E over growth
    #[serde(rename = "PEG")]
    Peg,
    /// P/E over growth plus dividend yield
    #[serde(rename = "PEGY")]
    Pegy,
}

impl fmt::Display for PegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Peg => "PEG",
            Self::Pegy => "PEGY",
        })
    }
}

/// Valuation signal read from a PEG or PEGY value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PegSignal {
    /// Below 1
    Undervalued,
    /// From 1 up to 2
    Fair,
    /// 2 and above
    Overvalued,
}

/// A computed PEG or PEGY ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PegyRatio {
    /// Ratio kind
    #[serde(rename = "type")]
    pub kind: PegKind,
    /// Ratio value
    pub value: f64,
}

impl PegyRatio {
    /// Band the value: `< 1` undervalued, `< 2` fair, otherwise overvalued.
    pub fn signal(&self) -> PegSignal {
        if self.value < 1.0 {
            PegSignal::Undervalued
        } else if self.value < 2.0 {
            PegSignal::Fair
        } else {
            PegSignal::Overvalued
        }
    }

    /// One-line reading of the ratio.
    pub fn interpretation(&self) -> String {
        let reading = match self.signal() {
            PegSignal::Undervalued => "suggests the stock may be undervalued.",
            PegSignal::Fair => "suggests fair valuation.",
            PegSignal::Overvalued => "suggests the stock may be overvalued.",
        };
        format!("PEGY/PEG Ratio {:.2} {}", self.value, reading)
    }
}

impl fmt::Display for PegyRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.kind, self.value)
    }
}

/// Compute PEGY, or PEG when there is no dividend.
///
/// Zero inputs count as missing. Returns `None` when P/E or growth is
/// missing, or when growth and dividend cancel out.
pub fn calculate_pegy(
    pe: Option<f64>,
    earnings_quarterly_growth: Option<f64>,
    dividend_yield: Option<f64>,
) -> Option<PegyRatio> {
    let pe = nonzero(pe)?;
    let growth_pct = nonzero(earnings_quarterly_growth)? * 100.0;

    let (kind, denominator) = match nonzero(dividend_yield) {
        Some(dividend) => (PegKind::Pegy, growth_pct + dividend * 100.0),
        None => (PegKind::Peg, growth_pct),
    };

    if denominator == 0.0 {
        return None;
    }

    Some(PegyRatio {
        kind,
        value: pe / denominator,
    })
}

/// PEGY from a snapshot's trailing P/E, quarterly growth and dividend yield.
pub fn pegy_from_snapshot(snapshot: &FinancialSnapshot) -> Option<PegyRatio> {
    calculate_pegy(
        snapshot.trailing_pe,
        snapshot.earnings_quarterly_growth,
        snapshot.dividend_yield,
    )
}
