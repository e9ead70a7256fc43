//! Rule of 40 health check for growth companies.

use lynchpin_data::FinancialSnapshot;
use serde::Serialize;

/// Rule of 40 outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOf40 {
    /// Revenue growth plus margin, in percent
    pub score: f64,
    /// Whether the score reaches [`RuleOf40::THRESHOLD`]
    pub meets: bool,
    /// One-line verdict
    pub message: String,
}

impl RuleOf40 {
    /// Passing score, in percent.
    pub const THRESHOLD: f64 = 40.0;

    /// What the benchmark measures.
    pub const EXPLANATION: &'static str = "The Rule of 40 is a benchmark used to evaluate \
        growth companies, especially in tech. It adds Revenue Growth Rate (%) and \
        Profitability Margin (%). If the sum is at least 40%, the company is considered \
        to have a healthy balance between growth and profitability.";
}

/// Score revenue growth plus profitability margin, both in percent.
pub fn rule_of_40(revenue_growth_pct: f64, margin_pct: f64) -> RuleOf40 {
    let score = revenue_growth_pct + margin_pct;
    let meets = score >= RuleOf40::THRESHOLD;
    let message = if meets {
        format!("Meets Rule of 40 (Score = {:.2}%)", score)
    } else {
        format!("Does NOT meet Rule of 40 (Score = {:.2}%)", score)
    };

    RuleOf40 {
        score,
        meets,
        message,
    }
}

/// Rule of 40 using revenue growth and operating margin, missing values as 0.
pub fn rule_of_40_from_snapshot(snapshot: &FinancialSnapshot) -> RuleOf40 {
    let growth = snapshot.revenue_growth.unwrap_or(0.0) * 100.0;
    let margin = snapshot.operating_margins.unwrap_or(0.0) * 100.0;
    rule_of_40(growth, margin)
}
