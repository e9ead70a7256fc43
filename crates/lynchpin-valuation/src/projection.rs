//! Scenario share price projection.
//!
//! Each scenario compounds revenue over the horizon, applies a profit
//! margin to the final year's revenue and capitalizes those earnings at a
//! future P/E. The result is compared with a base market cap to give upside.

use crate::error::{Result, ValuationError};
use lynchpin_data::{FinancialSnapshot, nonzero};
use serde::{Deserialize, Serialize};

/// Longest horizon, in years, the projection and DCF models accept.
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// Revenue, margin and multiple assumptions for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name
    pub name: String,
    /// Annual revenue growth
    pub revenue_growth: f64,
    /// Net profit margin in the final year
    pub profit_margin: f64,
    /// P/E applied to final-year earnings
    pub future_pe: f64,
}

impl Scenario {
    /// Create a scenario.
    pub fn new(name: impl Into<String>, revenue_growth: f64, profit_margin: f64, future_pe: f64) -> Self {
        Self {
            name: name.into(),
            revenue_growth,
            profit_margin,
            future_pe,
        }
    }

    /// Low, medium and high scenarios at a 15x exit multiple.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Low", 0.03, 0.04, 15.0),
            Self::new("Medium", 0.05, 0.06, 15.0),
            Self::new("High", 0.07, 0.07, 15.0),
        ]
    }
}

/// Company figures shared by all scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInputs {
    /// Current share price
    pub current_price: f64,
    /// Shares outstanding
    pub shares_outstanding: f64,
    /// Market cap the upside is measured against
    pub base_market_cap: f64,
    /// Revenue in the first projected year
    pub initial_revenue: f64,
    /// Number of projected years, first year included
    pub years: u32,
    /// Calendar year of the first projected year
    pub first_year: i32,
}

impl ProjectionInputs {
    /// Build inputs from a snapshot's price, shares, market cap and revenue.
    ///
    /// Returns `None` when any of them is missing or zero.
    pub fn from_snapshot(snapshot: &FinancialSnapshot, years: u32, first_year: i32) -> Option<Self> {
        Some(Self {
            current_price: nonzero(snapshot.current_price)?,
            shares_outstanding: nonzero(snapshot.shares_outstanding)?,
            base_market_cap: nonzero(snapshot.market_cap)?,
            initial_revenue: nonzero(snapshot.total_revenue)?,
            years,
            first_year,
        })
    }

    /// Current price times shares outstanding.
    pub fn current_market_cap(&self) -> f64 {
        self.current_price * self.shares_outstanding
    }

    /// Last projected calendar year, `None` when it does not fit an `i32`.
    pub fn final_year(&self) -> Option<i32> {
        let span = i32::try_from(self.years.checked_sub(1)?).ok()?;
        self.first_year.checked_add(span)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_PROJECTION_YEARS).contains(&self.years) {
            return Err(ValuationError::InvalidInput(format!(
                "Projection years must be between 1 and {}",
                MAX_PROJECTION_YEARS
            )));
        }
        if self.final_year().is_none() {
            return Err(ValuationError::InvalidInput(format!(
                "First year {} is out of range",
                self.first_year
            )));
        }
        if self.shares_outstanding <= 0.0 {
            return Err(ValuationError::InvalidInput(
                "Shares outstanding must be positive".to_string(),
            ));
        }
        if self.base_market_cap == 0.0 {
            return Err(ValuationError::InvalidInput(
                "Base market cap must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioProjection {
    /// Scenario assumptions
    pub scenario: Scenario,
    /// Projected revenue per calendar year
    pub revenues: Vec<(i32, f64)>,
    /// Last projected calendar year
    pub final_year: i32,
    /// Final-year earnings
    pub final_earnings: f64,
    /// Final-year earnings times the future P/E
    pub projected_market_cap: f64,
    /// Projected market cap per share
    pub projected_price: f64,
    /// Projected market cap over base market cap, minus one
    pub upside: f64,
}

/// Project each scenario.
pub fn project_scenarios(
    inputs: &ProjectionInputs,
    scenarios: &[Scenario],
) -> Result<Vec<ScenarioProjection>> {
    inputs.validate()?;
    let final_year = inputs.final_year().unwrap_or(inputs.first_year);

    Ok(scenarios
        .iter()
        .map(|scenario| project(inputs, scenario, final_year))
        .collect())
}

fn project(inputs: &ProjectionInputs, scenario: &Scenario, final_year: i32) -> ScenarioProjection {
    let mut revenues = Vec::new();
    let mut revenue = inputs.initial_revenue;
    for year in inputs.first_year..=final_year {
        revenues.push((year, revenue));
        revenue *= 1.0 + scenario.revenue_growth;
    }

    let final_revenue = revenues.last().map_or(inputs.initial_revenue, |(_, r)| *r);
    let final_earnings = final_revenue * scenario.profit_margin;
    let projected_market_cap = final_earnings * scenario.future_pe;

    ScenarioProjection {
        scenario: scenario.clone(),
        revenues,
        final_year,
        final_earnings,
        projected_market_cap,
        projected_price: projected_market_cap / inputs.shares_outstanding,
        upside: projected_market_cap / inputs.base_market_cap - 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn inputs() -> ProjectionInputs {
        ProjectionInputs {
            current_price: 2.40,
            shares_outstanding: 145_000_000.0,
            base_market_cap: 2_400_000_000.0,
            initial_revenue: 5_800_000_000.0,
            years: 5,
            first_year: 2025,
        }
    }

    #[test]
    fn test_default_scenarios() {
        let projections = project_scenarios(&inputs(), &Scenario::defaults()).unwrap();
        assert_eq!(projections.len(), 3);

        let low = &projections[0];
        assert_eq!(low.final_year, 2029);
        assert_eq!(low.revenues.len(), 5);
        assert_eq!(low.revenues[0], (2025, 5_800_000_000.0));
        assert_relative_eq!(low.revenues[4].1, 6_527_951_098.0, max_relative = 1e-9);
        assert_relative_eq!(low.final_earnings, 261_118_043.92, max_relative = 1e-9);
        assert_relative_eq!(low.projected_market_cap, 3_916_770_658.8, max_relative = 1e-9);
        assert_relative_eq!(low.projected_price, 27.01221144, max_relative = 1e-9);
        assert_relative_eq!(low.upside, 0.6319877745, max_relative = 1e-9);

        let high = &projections[2];
        assert_relative_eq!(high.projected_price, 55.05343242, max_relative = 1e-9);
    }

    #[test]
    fn test_current_market_cap() {
        assert_relative_eq!(inputs().current_market_cap(), 348_000_000.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let zero_shares = ProjectionInputs {
            shares_outstanding: 0.0,
            ..inputs()
        };
        assert!(matches!(
            project_scenarios(&zero_shares, &Scenario::defaults()),
            Err(ValuationError::InvalidInput(_))
        ));

        let zero_years = ProjectionInputs {
            years: 0,
            ..inputs()
        };
        assert!(project_scenarios(&zero_years, &Scenario::defaults()).is_err());

        let zero_base = ProjectionInputs {
            base_market_cap: 0.0,
            ..inputs()
        };
        assert!(project_scenarios(&zero_base, &Scenario::defaults()).is_err());
    }

    #[rstest]
    #[case(MAX_PROJECTION_YEARS + 1, 2025)]
    #[case(u32::MAX, 2025)]
    #[case(5, i32::MAX)]
    fn test_horizon_out_of_range(#[case] years: u32, #[case] first_year: i32) {
        let long = ProjectionInputs {
            years,
            first_year,
            ..inputs()
        };
        assert!(matches!(
            project_scenarios(&long, &Scenario::defaults()),
            Err(ValuationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_longest_horizon() {
        let long = ProjectionInputs {
            years: MAX_PROJECTION_YEARS,
            ..inputs()
        };
        assert_eq!(long.final_year(), Some(2074));

        let projections = project_scenarios(&long, &Scenario::defaults()).unwrap();
        assert_eq!(projections[0].revenues.len(), 50);
        assert_eq!(projections[0].final_year, 2074);
        assert_eq!(projections[0].revenues.last().unwrap().0, 2074);
    }

    #[test]
    fn test_final_year_overflow() {
        let inputs = ProjectionInputs {
            years: u32::MAX,
            ..inputs()
        };
        assert_eq!(inputs.final_year(), None);
    }

    #[test]
    fn test_from_snapshot_requires_fields() {
        use lynchpin_data::Metric;

        let snapshot = FinancialSnapshot::new("BME.L")
            .with(Metric::CurrentPrice, 2.4)
            .with(Metric::SharesOutstanding, 145e6)
            .with(Metric::MarketCap, 348e6);
        assert!(ProjectionInputs::from_snapshot(&snapshot, 5, 2025).is_none());

        let snapshot = snapshot.with(Metric::TotalRevenue, 5.8e9);
        let inputs = ProjectionInputs::from_snapshot(&snapshot, 5, 2025).unwrap();
        assert_eq!(inputs.final_year(), Some(2029));
    }
}
