//! Per-company scorecard and aggregate score.

use crate::bands::Score;
use crate::registry::{ScorerInfo, available_scorers};
use lynchpin_data::FinancialSnapshot;
use serde::Serialize;
use std::fmt;

/// Aggregate of the ordinal scores that were available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Aggregate {
    /// At least one score was available
    Scored {
        /// Sum of available scores
        total: u32,
        /// `10 x` the number of available scores
        max: u32,
    },
    /// No score was available
    NotEnoughData,
}

impl Aggregate {
    /// Sum the available scores out of `10 x count`.
    pub fn from_scores<'a>(scores: impl IntoIterator<Item = &'a Score>) -> Self {
        let (total, count) = scores
            .into_iter()
            .filter_map(|s| s.value)
            .fold((0u32, 0u32), |(total, count), v| (total + u32::from(v), count + 1));

        if count == 0 {
            Self::NotEnoughData
        } else {
            Self::Scored {
                total,
                max: count * 10,
            }
        }
    }

    /// Fraction of the maximum achieved, in `[0.1, 1.0]`.
    pub fn ratio(&self) -> Option<f64> {
        match *self {
            Self::Scored { total, max } => Some(f64::from(total) / f64::from(max)),
            Self::NotEnoughData => None,
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Scored { total, max } => write!(
                f,
                "{}/{} ({:.1}%)",
                total,
                max,
                f64::from(total) / f64::from(max) * 100.0
            ),
            Self::NotEnoughData => f.write_str("Not enough data"),
        }
    }
}

/// One scored metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMetric {
    /// Scorer name
    pub name: &'static str,
    /// Display label
    pub label: &'static str,
    /// Raw snapshot value
    pub value: Option<f64>,
    /// Whether the value is a fraction shown as a percentage
    pub percent: bool,
    /// Resulting score
    pub score: Score,
    /// Whether the score counts toward the aggregate
    pub in_aggregate: bool,
}

impl ScoredMetric {
    fn new(scorer: &ScorerInfo, snapshot: &FinancialSnapshot) -> Self {
        Self {
            name: scorer.name,
            label: scorer.label,
            value: snapshot.get(scorer.metric),
            percent: scorer.percent,
            score: scorer.score_snapshot(snapshot),
            in_aggregate: scorer.in_aggregate,
        }
    }
}

/// Every registered scorer applied to one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    /// Ticker symbol
    pub symbol: String,
    /// Company display name
    pub name: String,
    /// Scored metrics, in report order
    pub metrics: Vec<ScoredMetric>,
    /// Aggregate over the aggregate subset
    pub aggregate: Aggregate,
}

impl ScoreCard {
    /// Score a snapshot with every registered scorer.
    pub fn from_snapshot(snapshot: &FinancialSnapshot) -> Self {
        let metrics: Vec<ScoredMetric> = available_scorers()
            .iter()
            .map(|scorer| ScoredMetric::new(scorer, snapshot))
            .collect();

        let aggregate = Aggregate::from_scores(
            metrics
                .iter()
                .filter(|m| m.in_aggregate)
                .map(|m| &m.score),
        );

        Self {
            symbol: snapshot.symbol.clone(),
            name: snapshot.display_name().to_string(),
            metrics,
            aggregate,
        }
    }

    /// Look up a scored metric by scorer name.
    pub fn get(&self, name: &str) -> Option<&ScoredMetric> {
        self.metrics.iter().find(|m| m.name == name)
    }
}
