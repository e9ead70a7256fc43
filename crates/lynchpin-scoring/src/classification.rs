//! Peter Lynch stock categories.
//!
//! Three of Lynch's six categories can be told apart from snapshot ratios
//! alone. They are tested in priority order: fast grower, slow grower,
//! stalwart. Cyclicals, turnarounds and asset plays need a human.

use lynchpin_data::{FinancialSnapshot, nonzero};
use serde::Serialize;
use std::fmt;

/// Large-cap threshold used by the slow grower and stalwart tests.
pub const LARGE_CAP: f64 = 10e9;

/// Ratios the classifier reads.
///
/// Absent values take the defaults noted per field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LynchInputs {
    /// Revenue growth (default 0)
    pub revenue_growth: f64,
    /// Trailing P/E over annual earnings growth in percent
    pub peg: Option<f64>,
    /// Free cash flow
    pub free_cash_flow: Option<f64>,
    /// Debt to equity in percent (default 0)
    pub debt_to_equity: f64,
    /// Dividend yield as a fraction (default 0)
    pub dividend_yield: f64,
    /// Payout ratio (default 0)
    pub payout_ratio: f64,
    /// Market capitalization (default 0)
    pub market_cap: f64,
    /// Trailing P/E
    pub trailing_pe: Option<f64>,
    /// Five-year average dividend yield as a fraction (default 0)
    pub five_year_avg_dividend_yield: f64,
    /// Annual earnings growth
    pub earnings_growth: Option<f64>,
    /// Beta (default 1)
    pub beta: f64,
    /// Sector label (default empty)
    pub sector: String,
}

impl LynchInputs {
    /// Extract classifier inputs from a snapshot.
    ///
    /// PEG here uses annual earnings growth, unlike the PEGY valuation which
    /// uses quarterly growth. Zero P/E or zero growth leave PEG undefined.
    pub fn from_snapshot(snapshot: &FinancialSnapshot) -> Self {
        let trailing_pe = snapshot.trailing_pe;
        let earnings_growth = snapshot.earnings_growth;
        let peg = match (nonzero(trailing_pe), nonzero(earnings_growth)) {
            (Some(pe), Some(growth)) => Some(pe / (growth * 100.0)),
            _ => None,
        };

        Self {
            revenue_growth: snapshot.revenue_growth.unwrap_or(0.0),
            peg,
            free_cash_flow: snapshot.free_cash_flow,
            debt_to_equity: snapshot.debt_to_equity.unwrap_or(0.0),
            dividend_yield: snapshot.dividend_yield.unwrap_or(0.0),
            payout_ratio: snapshot.payout_ratio.unwrap_or(0.0),
            market_cap: snapshot.market_cap.unwrap_or(0.0),
            trailing_pe,
            five_year_avg_dividend_yield: snapshot.five_year_avg_dividend_yield.unwrap_or(0.0),
            earnings_growth,
            beta: snapshot.beta.unwrap_or(1.0),
            sector: snapshot.sector.clone().unwrap_or_default(),
        }
    }

    /// Revenue growth of at least 25% at a sane PEG, with positive cash flow
    /// and moderate leverage.
    pub fn is_fast_grower(&self) -> bool {
        self.revenue_growth >= 0.25
            && self.peg.is_some_and(|peg| (0.5..=3.0).contains(&peg))
            && self.free_cash_flow.is_some_and(|fcf| fcf > 0.0)
            && self.debt_to_equity < 100.0
    }

    /// GDP-like growth from a large, dividend-paying company whose yield is
    /// above its five-year average.
    pub fn is_slow_grower(&self) -> bool {
        let slow_growth = (0.01..=0.25).contains(&self.revenue_growth);
        let solid_dividend = self.dividend_yield >= 0.01
            && self.payout_ratio > 0.0
            && self.payout_ratio <= 0.85;
        let large_cap = self.market_cap > LARGE_CAP;
        let upside_is_limited = nonzero(self.trailing_pe).is_some_and(|pe| pe <= 20.0);
        let dividend_rising = self.dividend_yield > self.five_year_avg_dividend_yield;

        slow_growth && solid_dividend && large_cap && upside_is_limited && dividend_rising
    }

    /// Large company with high single-digit growth, positive earnings
    /// growth, a mid-range P/E and low volatility.
    pub fn is_stalwart(&self) -> bool {
        self.market_cap > LARGE_CAP
            && (0.06..=0.10).contains(&self.revenue_growth)
            && self.earnings_growth.is_some_and(|g| g > 0.0)
            && self.trailing_pe.is_some_and(|pe| (12.0..=25.0).contains(&pe))
            && self.beta <= 1.2
    }

    /// Classify in priority order.
    pub fn classify(&self) -> Classification {
        if self.is_fast_grower() {
            Classification::FastGrower
        } else if self.is_slow_grower() {
            Classification::SlowGrower
        } else if self.is_stalwart() {
            Classification::Stalwart
        } else {
            Classification::Unclassified {
                sector: self.sector.to_lowercase(),
            }
        }
    }
}

/// Lynch category assigned to a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "category")]
pub enum Classification {
    /// Fast Grower
    FastGrower,
    /// Slow Grower
    SlowGrower,
    /// Stalwart
    Stalwart,
    /// None of the ratio-based categories matched
    Unclassified {
        /// Lowercase sector label
        sector: String,
    },
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FastGrower => f.write_str("Fast Grower"),
            Self::SlowGrower => f.write_str("Slow Grower"),
            Self::Stalwart => f.write_str("Stalwart"),
            Self::Unclassified { sector } => write!(
                f,
                "company from sector: {}. Can be one of the: Cyclical, Turnaround, Asset Play. \
                 Further classification requires manual judgment.",
                sector
            ),
        }
    }
}

/// Classify a snapshot.
pub fn classify(snapshot: &FinancialSnapshot) -> Classification {
    LynchInputs::from_snapshot(snapshot).classify()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lynchpin_data::Metric;

    fn base_inputs() -> LynchInputs {
        LynchInputs::from_snapshot(&FinancialSnapshot::new("X"))
    }

    #[test]
    fn test_defaults() {
        let inputs = base_inputs();
        assert_eq!(inputs.revenue_growth, 0.0);
        assert_eq!(inputs.beta, 1.0);
        assert_eq!(inputs.debt_to_equity, 0.0);
        assert!(inputs.peg.is_none());
        assert_eq!(inputs.sector, "");
    }

    #[test]
    fn test_fast_grower() {
        let inputs = LynchInputs {
            revenue_growth: 0.30,
            peg: Some(1.5),
            free_cash_flow: Some(1000.0),
            debt_to_equity: 50.0,
            ..base_inputs()
        };
        assert_eq!(inputs.classify(), Classification::FastGrower);
        assert_eq!(inputs.classify().to_string(), "Fast Grower");
    }

    #[test]
    fn test_fast_grower_rejects_leverage() {
        let inputs = LynchInputs {
            revenue_growth: 0.30,
            peg: Some(1.5),
            free_cash_flow: Some(1000.0),
            debt_to_equity: 100.0,
            ..base_inputs()
        };
        assert!(!inputs.is_fast_grower());
    }

    #[test]
    fn test_slow_grower() {
        let inputs = LynchInputs {
            revenue_growth: 0.03,
            dividend_yield: 0.031,
            payout_ratio: 0.6,
            market_cap: 200e9,
            trailing_pe: Some(18.0),
            five_year_avg_dividend_yield: 0.028,
            ..base_inputs()
        };
        assert_eq!(inputs.classify(), Classification::SlowGrower);
    }

    #[test]
    fn test_slow_grower_needs_rising_yield() {
        let inputs = LynchInputs {
            revenue_growth: 0.03,
            dividend_yield: 0.031,
            payout_ratio: 0.6,
            market_cap: 200e9,
            trailing_pe: Some(18.0),
            five_year_avg_dividend_yield: 0.035,
            ..base_inputs()
        };
        assert!(!inputs.is_slow_grower());
    }

    #[test]
    fn test_stalwart() {
        let inputs = LynchInputs {
            revenue_growth: 0.08,
            market_cap: 50e9,
            earnings_growth: Some(0.1),
            trailing_pe: Some(22.0),
            beta: 0.9,
            ..base_inputs()
        };
        assert_eq!(inputs.classify(), Classification::Stalwart);
    }

    #[test]
    fn test_fast_grower_takes_priority() {
        let inputs = LynchInputs {
            revenue_growth: 0.25,
            peg: Some(0.5),
            free_cash_flow: Some(1.0),
            dividend_yield: 0.02,
            payout_ratio: 0.5,
            market_cap: 50e9,
            trailing_pe: Some(15.0),
            ..base_inputs()
        };
        assert_eq!(inputs.classify(), Classification::FastGrower);
    }

    #[test]
    fn test_unclassified_names_sector() {
        let snapshot = FinancialSnapshot::new("X").with_sector("Technology");
        let label = classify(&snapshot).to_string();
        assert!(label.contains("technology"));
        assert!(label.contains("Cyclical, Turnaround, Asset Play"));
    }

    #[test]
    fn test_peg_uses_annual_growth() {
        let snapshot = FinancialSnapshot::new("X")
            .with(Metric::TrailingPe, 30.0)
            .with(Metric::EarningsGrowth, 0.2)
            .with(Metric::EarningsQuarterlyGrowth, 0.5);
        let inputs = LynchInputs::from_snapshot(&snapshot);
        assert_relative_eq!(inputs.peg.unwrap(), 1.5);
    }

    #[test]
    fn test_zero_growth_leaves_peg_undefined() {
        let snapshot = FinancialSnapshot::new("X")
            .with(Metric::TrailingPe, 30.0)
            .with(Metric::EarningsGrowth, 0.0);
        assert!(LynchInputs::from_snapshot(&snapshot).peg.is_none());
    }
}
