//! Ordered band tables mapping a ratio to a 1-10 score.
//!
//! A [`BandTable`] is evaluated top-down: the first [`Band`] whose bound
//! matches wins, otherwise the fallback applies. Equality bounds compare
//! exactly, so a value a hair off the literal falls through to the next band.

use serde::Serialize;
use std::fmt;

/// Label reported when the input metric is missing.
pub const NOT_AVAILABLE: &str = "Not available";

/// Comparison applied to the (scaled) input value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `value >= x`
    AtLeast(f64),
    /// `value > x`
    Above(f64),
    /// `value == x`
    Exactly(f64),
    /// `value <= x`
    AtMost(f64),
    /// `value < x`
    Below(f64),
}

impl Bound {
    /// Whether `value` satisfies the bound.
    #[allow(clippy::float_cmp)]
    pub fn matches(self, value: f64) -> bool {
        match self {
            Self::AtLeast(x) => value >= x,
            Self::Above(x) => value > x,
            Self::Exactly(x) => value == x,
            Self::AtMost(x) => value <= x,
            Self::Below(x) => value < x,
        }
    }
}

/// One row of a band table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Condition on the scaled value
    pub bound: Bound,
    /// Score in 1..=10
    pub score: u8,
    /// Qualitative label
    pub label: &'static str,
}

impl Band {
    /// Create a band.
    pub const fn new(bound: Bound, score: u8, label: &'static str) -> Self {
        Self {
            bound,
            score,
            label,
        }
    }
}

/// Score and label produced by a band lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Ordinal score, `None` when the input was missing
    pub value: Option<u8>,
    /// Qualitative label
    pub label: &'static str,
}

impl Score {
    /// Score for a missing input.
    pub const NOT_AVAILABLE: Self = Self {
        value: None,
        label: NOT_AVAILABLE,
    };

    /// Create a score.
    pub const fn new(value: u8, label: &'static str) -> Self {
        Self {
            value: Some(value),
            label,
        }
    }

    /// Whether a score was produced.
    pub const fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "Score: {}/10 ({})", value, self.label),
            None => f.write_str(self.label),
        }
    }
}

/// An ordered band table with a fallback.
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    /// Multiplier applied to the input before lookup (100 for fractions scored as percent)
    pub scale: f64,
    /// Bands evaluated in order
    pub bands: &'static [Band],
    /// Applied when no band matches
    pub fallback: Band,
}

impl BandTable {
    /// Look up the score for `value`.
    pub fn score(&self, value: Option<f64>) -> Score {
        let Some(value) = value else {
            return Score::NOT_AVAILABLE;
        };

        let scaled = value * self.scale;
        let band = self
            .bands
            .iter()
            .find(|band| band.bound.matches(scaled))
            .unwrap_or(&self.fallback);

        Score::new(band.score, band.label)
    }
}
