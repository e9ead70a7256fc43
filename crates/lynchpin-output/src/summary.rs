//! Console summaries for the analysis, classification and projection tools.

use crate::format::{fmt_grouped, fmt_money, fmt_percent, fmt_price};
use lynchpin_scoring::{Classification, LynchInputs, ScoreCard, ScoredMetric};
use lynchpin_valuation::{ProjectionInputs, ScenarioProjection};
use std::fmt::Write;

fn metric_value(metric: &ScoredMetric) -> String {
    match metric.value {
        Some(value) if metric.percent => fmt_percent(value),
        Some(value) => format!("{:.2}", value),
        None => "Not available".to_string(),
    }
}

/// Render a scorecard: one block per metric, then the aggregate.
pub fn render_scorecard(card: &ScoreCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Analysis for {} ({}) ---", card.name, card.symbol);

    for metric in &card.metrics {
        let _ = writeln!(out, "{}: {}", metric.label, metric_value(metric));
        let _ = writeln!(out, "   - {}", metric.score);
    }

    let _ = write!(out, "\nFinal Score: {}", card.aggregate);
    out
}

/// Render the classifier inputs and the resulting category.
pub fn render_classification(inputs: &LynchInputs, classification: &Classification) -> String {
    let optional = |value: Option<f64>| value.map_or_else(|| "None".to_string(), |v| v.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "revenueGrowth={}", inputs.revenue_growth);
    let _ = writeln!(out, "trailingPE={}", optional(inputs.trailing_pe));
    let _ = writeln!(out, "dividendYield={}", inputs.dividend_yield);
    let _ = writeln!(out, "payoutRatio={}", inputs.payout_ratio);
    let _ = writeln!(out, "marketCap={}", inputs.market_cap);
    let _ = writeln!(
        out,
        "fiveYearAvgDividendYield={}",
        inputs.five_year_avg_dividend_yield
    );
    let _ = writeln!(out, "earningsGrowth={}", optional(inputs.earnings_growth));
    let _ = writeln!(out, "PEG={}", optional(inputs.peg));
    let _ = writeln!(out, "freeCashflow={}", optional(inputs.free_cash_flow));
    let _ = writeln!(out, "debtToEquity={}", inputs.debt_to_equity);
    let _ = writeln!(out, "beta={}", inputs.beta);
    let _ = write!(out, "\nCompany classified as {}", classification);
    out
}

/// Render scenario projections with the company figures they started from.
pub fn render_projections(inputs: &ProjectionInputs, projections: &[ScenarioProjection]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Company Information ---");
    let _ = writeln!(out, "Current Share Price: {}", fmt_price(inputs.current_price));
    let _ = writeln!(
        out,
        "Current Shares Outstanding: {}",
        fmt_grouped(inputs.shares_outstanding, 0)
    );
    let _ = writeln!(out, "Current Market Cap: {}", fmt_money(inputs.current_market_cap()));
    let _ = writeln!(
        out,
        "Base Market Cap for Upside Calculation: {}",
        fmt_money(inputs.base_market_cap)
    );

    for projection in projections {
        let scenario = &projection.scenario;
        let year = projection.final_year;
        let _ = writeln!(out, "\n--- Scenario: {} ---", scenario.name);
        let _ = writeln!(out, "  Revenue Growth Rate: {:.1}%", scenario.revenue_growth * 100.0);
        let _ = writeln!(out, "  Profit Margin: {:.1}%", scenario.profit_margin * 100.0);
        let _ = writeln!(out, "  Future P/E Multiple: {}x", scenario.future_pe);
        let _ = writeln!(out, "  Projected Revenues (millions):");
        for (year, revenue) in &projection.revenues {
            let _ = writeln!(out, "    {}: {}m", year, fmt_money(revenue / 1_000_000.0));
        }
        let _ = writeln!(out, "  Total Earnings ({}): {}", year, fmt_money(projection.final_earnings));
        let _ = writeln!(
            out,
            "  Projected Market Cap ({}): {}",
            year,
            fmt_money(projection.projected_market_cap)
        );
        let _ = writeln!(
            out,
            "  Projected Price Per Share ({}): {}",
            year,
            fmt_price(projection.projected_price)
        );
        let _ = writeln!(out, "  {} Year Upside: {}", inputs.years, fmt_percent(projection.upside));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lynchpin_data::{FinancialSnapshot, Metric};
    use lynchpin_scoring::classify;
    use lynchpin_valuation::{Scenario, project_scenarios};

    #[test]
    fn test_render_scorecard() {
        let snapshot = FinancialSnapshot::new("AAPL")
            .with(Metric::TrailingPe, 23.0)
            .with(Metric::ProfitMargins, 0.25);
        let text = render_scorecard(&ScoreCard::from_snapshot(&snapshot));

        assert!(text.starts_with("--- Analysis for AAPL (AAPL) ---"));
        assert!(text.contains("PE Ratio: 23.00\n   - Score: 6/10 (Average)"));
        assert!(text.contains("Profit Margin: 25.00%\n   - Score: 8/10 (Good)"));
        assert!(text.contains("P/B Ratio: Not available\n   - Not available"));
        assert!(text.ends_with("Final Score: 14/20 (70.0%)"));
    }

    #[test]
    fn test_render_scorecard_without_data() {
        let text = render_scorecard(&ScoreCard::from_snapshot(&FinancialSnapshot::new("X")));
        assert!(text.ends_with("Final Score: Not enough data"));
    }

    #[test]
    fn test_render_classification() {
        let snapshot = FinancialSnapshot::new("X").with_sector("Energy");
        let inputs = LynchInputs::from_snapshot(&snapshot);
        let text = render_classification(&inputs, &classify(&snapshot));
        assert!(text.contains("beta=1"));
        assert!(text.contains("Company classified as company from sector: energy."));
    }

    #[test]
    fn test_render_projections() {
        let inputs = ProjectionInputs {
            current_price: 2.40,
            shares_outstanding: 145_000_000.0,
            base_market_cap: 2_400_000_000.0,
            initial_revenue: 5_800_000_000.0,
            years: 5,
            first_year: 2025,
        };
        let projections = project_scenarios(&inputs, &Scenario::defaults()).unwrap();
        let text = render_projections(&inputs, &projections);

        assert!(text.contains("Current Shares Outstanding: 145,000,000"));
        assert!(text.contains("Current Market Cap: $348,000,000"));
        assert!(text.contains("--- Scenario: Medium ---"));
        assert!(text.contains("    2025: $5,800m"));
        assert!(text.contains("Projected Price Per Share (2029): $27.01"));
        assert!(text.contains("5 Year Upside: 63.20%"));
    }
}
