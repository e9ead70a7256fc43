//! Discounted cash flow valuation.
//!
//! Free cash flow is compounded at `growth_rate` for `years`, each year
//! discounted back at `discount_rate`. A Gordon growth terminal value on the
//! final year's cash flow is discounted from the end of the horizon.

use crate::error::{Result, ValuationError};
use crate::projection::MAX_PROJECTION_YEARS;
use lynchpin_data::{FinancialSnapshot, nonzero};
use serde::{Deserialize, Serialize};

/// Growth rate used when neither the caller nor the snapshot supplies one.
pub const FALLBACK_GROWTH_RATE: f64 = 0.05;

/// DCF model assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfAssumptions {
    /// Annual FCF growth; `0.0` means "use the company's earnings growth"
    pub growth_rate: f64,
    /// Discount rate (cost of capital)
    pub discount_rate: f64,
    /// Perpetual growth after the projection horizon
    pub terminal_growth: f64,
    /// Projection horizon in years
    pub years: u32,
}

impl Default for DcfAssumptions {
    fn default() -> Self {
        Self {
            growth_rate: 0.0,
            discount_rate: 0.10,
            terminal_growth: 0.03,
            years: 5,
        }
    }
}

impl DcfAssumptions {
    /// Check that the assumptions yield a finite valuation.
    pub fn validate(&self) -> Result<()> {
        let rates = [self.growth_rate, self.discount_rate, self.terminal_growth];
        if !rates.iter().all(|r| r.is_finite()) {
            return Err(ValuationError::InvalidInput(
                "Growth, discount and terminal rates must be finite numbers".to_string(),
            ));
        }
        if self.discount_rate <= self.terminal_growth {
            return Err(ValuationError::InvalidDiscountRate {
                discount_rate: self.discount_rate,
                terminal_growth: self.terminal_growth,
            });
        }
        if !(1..=MAX_PROJECTION_YEARS).contains(&self.years) {
            return Err(ValuationError::InvalidInput(format!(
                "Projection years must be between 1 and {}",
                MAX_PROJECTION_YEARS
            )));
        }
        Ok(())
    }

    /// The growth rate to project with.
    ///
    /// A zero rate resolves to the company's annual earnings growth, or
    /// [`FALLBACK_GROWTH_RATE`] when that is not reported.
    pub fn resolve_growth(&self, earnings_growth: Option<f64>) -> f64 {
        if self.growth_rate == 0.0 {
            earnings_growth.unwrap_or(FALLBACK_GROWTH_RATE)
        } else {
            self.growth_rate
        }
    }
}

/// Company figures the DCF model reads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DcfInputs {
    /// Trailing twelve-month free cash flow
    pub free_cash_flow: Option<f64>,
    /// Shares outstanding
    pub shares_outstanding: Option<f64>,
    /// Annual earnings growth, used when no growth rate is assumed
    pub earnings_growth: Option<f64>,
}

impl DcfInputs {
    /// Extract DCF inputs from a snapshot.
    pub const fn from_snapshot(snapshot: &FinancialSnapshot) -> Self {
        Self {
            free_cash_flow: snapshot.free_cash_flow,
            shares_outstanding: snapshot.shares_outstanding,
            earnings_growth: snapshot.earnings_growth,
        }
    }
}

/// DCF valuation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DcfValuation {
    /// Present value of the projected free cash flows
    pub pv_fcfs: f64,
    /// Present value of the terminal value
    pub pv_terminal: f64,
    /// Sum of both present values
    pub total_equity: f64,
    /// Total equity over shares outstanding
    pub intrinsic_per_share: f64,
    /// Growth rate the projection used
    pub growth_rate: f64,
}

/// Run the DCF model.
///
/// Returns `Ok(None)` when free cash flow or shares outstanding is missing
/// or zero, whatever the assumptions, and an error when the assumptions are
/// invalid.
pub fn calculate_dcf(inputs: &DcfInputs, assumptions: &DcfAssumptions) -> Result<Option<DcfValuation>> {
    let (Some(fcf), Some(shares)) = (
        nonzero(inputs.free_cash_flow),
        nonzero(inputs.shares_outstanding),
    ) else {
        return Ok(None);
    };
    assumptions.validate()?;

    let growth_rate = assumptions.resolve_growth(inputs.earnings_growth);
    let discount = 1.0 + assumptions.discount_rate;

    let mut next_fcf = fcf;
    let mut pv_fcfs = 0.0;
    for year in 1..=assumptions.years {
        next_fcf *= 1.0 + growth_rate;
        pv_fcfs += next_fcf / discount.powf(f64::from(year));
    }

    let terminal_value = next_fcf * (1.0 + assumptions.terminal_growth)
        / (assumptions.discount_rate - assumptions.terminal_growth);
    let pv_terminal = terminal_value / discount.powf(f64::from(assumptions.years));

    let total_equity = pv_fcfs + pv_terminal;

    Ok(Some(DcfValuation {
        pv_fcfs,
        pv_terminal,
        total_equity,
        intrinsic_per_share: total_equity / shares,
        growth_rate,
    }))
}

/// Run the DCF model on a snapshot.
pub fn dcf_from_snapshot(
    snapshot: &FinancialSnapshot,
    assumptions: &DcfAssumptions,
) -> Result<Option<DcfValuation>> {
    calculate_dcf(&DcfInputs::from_snapshot(snapshot), assumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lynchpin_data::{InMemoryProvider, Metric, SnapshotProvider};
    use rstest::rstest;

    fn inputs() -> DcfInputs {
        DcfInputs {
            free_cash_flow: Some(100.0),
            shares_outstanding: Some(10.0),
            earnings_growth: None,
        }
    }

    fn assumptions() -> DcfAssumptions {
        DcfAssumptions {
            growth_rate: 0.08,
            ..DcfAssumptions::default()
        }
    }

    #[test]
    fn test_reference_valuation() {
        let result = calculate_dcf(&inputs(), &assumptions()).unwrap().unwrap();

        assert_relative_eq!(result.pv_fcfs, 473.3794793450521, epsilon = 1e-6);
        assert_relative_eq!(result.pv_terminal, 1342.4389249403696, epsilon = 1e-6);
        assert_relative_eq!(result.total_equity, 1815.8184042854218, epsilon = 1e-6);
        assert_relative_eq!(result.intrinsic_per_share, 181.5818404285422, epsilon = 1e-6);
        assert_relative_eq!(result.growth_rate, 0.08);
    }

    #[test]
    fn test_missing_inputs_yield_none() {
        let missing_fcf = DcfInputs {
            free_cash_flow: None,
            ..inputs()
        };
        assert_eq!(calculate_dcf(&missing_fcf, &assumptions()), Ok(None));

        let zero_shares = DcfInputs {
            shares_outstanding: Some(0.0),
            ..inputs()
        };
        assert_eq!(calculate_dcf(&zero_shares, &assumptions()), Ok(None));
    }

    #[test]
    fn test_discount_rate_must_exceed_terminal_growth() {
        let bad = DcfAssumptions {
            discount_rate: 0.03,
            terminal_growth: 0.03,
            ..assumptions()
        };
        assert!(matches!(
            calculate_dcf(&inputs(), &bad),
            Err(ValuationError::InvalidDiscountRate { .. })
        ));
    }

    #[test]
    fn test_zero_years_rejected() {
        let bad = DcfAssumptions {
            years: 0,
            ..assumptions()
        };
        assert!(matches!(
            calculate_dcf(&inputs(), &bad),
            Err(ValuationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_growth_resolution() {
        let defaults = DcfAssumptions::default();
        assert_relative_eq!(defaults.resolve_growth(Some(0.12)), 0.12);
        assert_relative_eq!(defaults.resolve_growth(None), FALLBACK_GROWTH_RATE);
        assert_relative_eq!(assumptions().resolve_growth(Some(0.12)), 0.08);
    }

    #[test]
    fn test_from_snapshot_uses_earnings_growth() {
        let snapshot = FinancialSnapshot::new("X")
            .with(Metric::FreeCashFlow, 100.0)
            .with(Metric::SharesOutstanding, 10.0)
            .with(Metric::EarningsGrowth, 0.08);
        let result = dcf_from_snapshot(&snapshot, &DcfAssumptions::default())
            .unwrap()
            .unwrap();
        assert_relative_eq!(result.intrinsic_per_share, 181.5818404285422, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_fcf_is_valued() {
        let negative = DcfInputs {
            free_cash_flow: Some(-100.0),
            ..inputs()
        };
        let result = calculate_dcf(&negative, &assumptions()).unwrap().unwrap();
        assert!(result.intrinsic_per_share < 0.0);
    }

    #[test]
    fn test_missing_data_checked_before_assumptions() {
        let missing = DcfInputs {
            shares_outstanding: None,
            ..inputs()
        };
        let bad = DcfAssumptions {
            discount_rate: 0.01,
            years: 0,
            ..assumptions()
        };
        assert_eq!(calculate_dcf(&missing, &bad), Ok(None));
    }

    #[rstest]
    #[case(f64::NAN, 0.10, 0.03)]
    #[case(0.08, f64::NAN, 0.03)]
    #[case(0.08, 0.10, f64::NAN)]
    #[case(0.08, f64::INFINITY, 0.03)]
    #[case(f64::NEG_INFINITY, 0.10, 0.03)]
    fn test_non_finite_rates_rejected(
        #[case] growth_rate: f64,
        #[case] discount_rate: f64,
        #[case] terminal_growth: f64,
    ) {
        let bad = DcfAssumptions {
            growth_rate,
            discount_rate,
            terminal_growth,
            years: 5,
        };
        assert!(matches!(
            calculate_dcf(&inputs(), &bad),
            Err(ValuationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_years_above_horizon_rejected() {
        let bad = DcfAssumptions {
            years: MAX_PROJECTION_YEARS + 1,
            ..assumptions()
        };
        assert!(matches!(
            calculate_dcf(&inputs(), &bad),
            Err(ValuationError::InvalidInput(_))
        ));

        let longest = DcfAssumptions {
            years: MAX_PROJECTION_YEARS,
            ..assumptions()
        };
        let result = calculate_dcf(&inputs(), &longest).unwrap().unwrap();
        assert!(result.intrinsic_per_share.is_finite());
    }

    #[rstest]
    #[case(DcfAssumptions::default())]
    #[case(assumptions())]
    #[case(DcfAssumptions { years: 10, ..assumptions() })]
    fn test_valuation_is_deterministic(#[case] assumptions: DcfAssumptions) {
        let first = calculate_dcf(&inputs(), &assumptions).unwrap();
        let second = calculate_dcf(&inputs(), &assumptions).unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn test_snapshot_round_trip_is_deterministic(
        #[values("ACME", "acme")] symbol: &str,
    ) {
        let snapshot = FinancialSnapshot::new("ACME")
            .with(Metric::FreeCashFlow, 100.0)
            .with(Metric::SharesOutstanding, 10.0)
            .with(Metric::EarningsGrowth, 0.0625);
        let json = serde_json::to_string(&[snapshot.clone()]).unwrap();
        let provider = InMemoryProvider::from_json_str(&json).unwrap();

        let first = provider.fetch_snapshot(symbol).await.unwrap();
        let second = provider.fetch_snapshot(symbol).await.unwrap();
        assert_eq!(first, snapshot);
        assert_eq!(first, second);

        let direct = dcf_from_snapshot(&snapshot, &assumptions()).unwrap();
        let fetched = dcf_from_snapshot(&first, &assumptions()).unwrap();
        let refetched = dcf_from_snapshot(&second, &assumptions()).unwrap();
        assert_eq!(direct, fetched);
        assert_eq!(fetched, refetched);
        assert_relative_eq!(
            fetched.unwrap().intrinsic_per_share,
            181.5818404285422,
            epsilon = 1e-6
        );
    }
}
