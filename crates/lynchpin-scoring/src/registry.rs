//! Scorer Registry
//!
//! Central registry for all ratio scorers. Allows lookup by name and drives
//! the snapshot scorecard.

use crate::bands::Score;
use crate::growth::score_earnings_growth;
use crate::income::score_dividend_yield;
use crate::quality::{score_profit_margin, score_roe};
use crate::value::{score_ev_ebitda, score_pb, score_pe, score_ps};
use lynchpin_data::{FinancialSnapshot, Metric};
use std::fmt;

/// Scorer categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScorerCategory {
    /// Valuation multiples (P/E, EV/EBITDA, P/B, P/S)
    Value,
    /// Profitability (margin, ROE)
    Quality,
    /// Growth (earnings growth)
    Growth,
    /// Shareholder income (dividend yield)
    Income,
}

impl ScorerCategory {
    /// All categories, in listing order.
    pub const ALL: [Self; 4] = [Self::Value, Self::Quality, Self::Growth, Self::Income];
}

impl fmt::Display for ScorerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "Value",
            Self::Quality => "Quality",
            Self::Growth => "Growth",
            Self::Income => "Income",
        })
    }
}

/// Scorer metadata
#[derive(Clone, Copy)]
pub struct ScorerInfo {
    /// Scorer name (unique identifier)
    pub name: &'static str,
    /// Display label used in reports
    pub label: &'static str,
    /// Scorer category
    pub category: ScorerCategory,
    /// Brief description of what the scorer measures
    pub description: &'static str,
    /// Snapshot metric the scorer reads
    pub metric: Metric,
    /// Whether the metric is a fraction usually shown as a percentage
    pub percent: bool,
    /// Whether the score counts toward the aggregate
    pub in_aggregate: bool,
    /// Multiplier from the snapshot's unit to the scorer's input unit
    pub snapshot_scale: f64,
    /// Scoring function
    pub score: fn(Option<f64>) -> Score,
}

impl fmt::Debug for ScorerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScorerInfo")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("metric", &self.metric)
            .field("in_aggregate", &self.in_aggregate)
            .finish_non_exhaustive()
    }
}

impl ScorerInfo {
    /// Score the metric this scorer reads from `snapshot`.
    pub fn score_snapshot(&self, snapshot: &FinancialSnapshot) -> Score {
        (self.score)(self.input(snapshot))
    }

    /// The scorer input taken from `snapshot`, in the scorer's unit.
    pub fn input(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        snapshot.get(self.metric).map(|v| v * self.snapshot_scale)
    }
}

/// Get all available scorers, in report order
pub fn available_scorers() -> Vec<ScorerInfo> {
    vec![
        ScorerInfo {
            name: "pe",
            label: "PE Ratio",
            category: ScorerCategory::Value,
            description: "Trailing price to earnings",
            metric: Metric::TrailingPe,
            percent: false,
            in_aggregate: true,
            snapshot_scale: 1.0,
            score: score_pe,
        },
        ScorerInfo {
            name: "ev_ebitda",
            label: "EV/EBITDA",
            category: ScorerCategory::Value,
            description: "Enterprise value to EBITDA",
            metric: Metric::EnterpriseToEbitda,
            percent: false,
            in_aggregate: true,
            snapshot_scale: 1.0,
            score: score_ev_ebitda,
        },
        ScorerInfo {
            name: "ps",
            label: "P/S Ratio",
            category: ScorerCategory::Value,
            description: "Price to trailing twelve month sales",
            metric: Metric::PriceToSales,
            percent: false,
            in_aggregate: false,
            snapshot_scale: 1.0,
            score: score_ps,
        },
        ScorerInfo {
            name: "pb",
            label: "P/B Ratio",
            category: ScorerCategory::Value,
            description: "Price to book value",
            metric: Metric::PriceToBook,
            percent: false,
            in_aggregate: false,
            snapshot_scale: 1.0,
            score: score_pb,
        },
        // Annual growth is often missing, so quarterly YoY growth stands in.
        ScorerInfo {
            name: "earnings_growth",
            label: "Earnings Growth (YoY as proxy)",
            category: ScorerCategory::Growth,
            description: "Quarterly year-over-year earnings growth",
            metric: Metric::EarningsQuarterlyGrowth,
            percent: true,
            in_aggregate: true,
            snapshot_scale: 1.0,
            score: score_earnings_growth,
        },
        ScorerInfo {
            name: "profit_margin",
            label: "Profit Margin",
            category: ScorerCategory::Quality,
            description: "Net income over revenue",
            metric: Metric::ProfitMargins,
            percent: true,
            in_aggregate: true,
            snapshot_scale: 1.0,
            score: score_profit_margin,
        },
        ScorerInfo {
            name: "roe",
            label: "Return on Equity (ROE)",
            category: ScorerCategory::Quality,
            description: "Net income over shareholders' equity",
            metric: Metric::ReturnOnEquity,
            percent: true,
            in_aggregate: true,
            snapshot_scale: 1.0,
            score: score_roe,
        },
        ScorerInfo {
            name: "dividend_yield",
            label: "Dividend Yield",
            category: ScorerCategory::Income,
            description: "Trailing dividend over price",
            metric: Metric::DividendYield,
            percent: true,
            in_aggregate: true,
            snapshot_scale: 100.0,
            score: score_dividend_yield,
        },
    ]
}

/// Get scorers by category
pub fn scorers_by_category(category: ScorerCategory) -> Vec<ScorerInfo> {
    available_scorers()
        .into_iter()
        .filter(|s| s.category == category)
        .collect()
}

/// Get scorer info by name
pub fn get_scorer(name: &str) -> Option<ScorerInfo> {
    available_scorers().into_iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_scorers_count() {
        assert_eq!(available_scorers().len(), 8);
    }

    #[test]
    fn test_aggregate_membership() {
        let aggregate: Vec<_> = available_scorers()
            .into_iter()
            .filter(|s| s.in_aggregate)
            .map(|s| s.name)
            .collect();
        assert_eq!(
            aggregate,
            vec!["pe", "ev_ebitda", "earnings_growth", "profit_margin", "roe", "dividend_yield"]
        );
    }

    #[test]
    fn test_scorers_by_category() {
        let counts: Vec<usize> = ScorerCategory::ALL
            .iter()
            .map(|c| scorers_by_category(*c).len())
            .collect();
        assert_eq!(counts, vec![4, 2, 1, 1]);
        assert_eq!(counts.iter().sum::<usize>(), available_scorers().len());
    }

    #[test]
    fn test_get_scorer() {
        let roe = get_scorer("roe").unwrap();
        assert_eq!(roe.metric, Metric::ReturnOnEquity);
        assert_eq!(roe.category, ScorerCategory::Quality);
        assert!(get_scorer("nonexistent").is_none());
    }

    #[test]
    fn test_dividend_scorer_reads_fraction_as_percent() {
        let snapshot = FinancialSnapshot::new("KO").with(Metric::DividendYield, 0.0125);
        let scorer = get_scorer("dividend_yield").unwrap();
        assert_eq!(scorer.score_snapshot(&snapshot), Score::new(6, "Baseline"));
        assert_eq!((scorer.score)(Some(1.25)), Score::new(6, "Baseline"));
    }

    #[test]
    fn test_only_dividend_yield_rescales_snapshot() {
        for scorer in available_scorers() {
            let expected = if scorer.name == "dividend_yield" { 100.0 } else { 1.0 };
            assert_eq!(scorer.snapshot_scale, expected, "{}", scorer.name);
        }
    }

    #[test]
    fn test_missing_metric_is_not_available() {
        let snapshot = FinancialSnapshot::new("X");
        for scorer in available_scorers() {
            assert_eq!(scorer.score_snapshot(&snapshot), Score::NOT_AVAILABLE);
        }
    }
}
