//! Plain-text valuation report.

use crate::format::{fmt_money, fmt_price};
use chrono::{Local, NaiveDate};
use lynchpin_valuation::{
    ComparablesResult, DcfValuation, Multiple, PegKind, PegyRatio, RuleOf40,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Width of the rule under the report header.
pub const RULE_WIDTH: usize = 60;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the valuation tool computed for one ticker.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationReport {
    /// Ticker symbol, upper-cased.
    pub symbol: String,

    /// Report date.
    pub date: NaiveDate,

    /// Current market price.
    pub price: Option<f64>,

    /// PEGY or PEG ratio.
    pub pegy: Option<PegyRatio>,

    /// DCF valuation.
    pub dcf: Option<DcfValuation>,

    /// Implied price per comparable multiple.
    pub comps: ComparablesResult,

    /// Peer-average multiples behind `comps`.
    pub average_multiples: BTreeMap<Multiple, f64>,

    /// Rule of 40 outcome.
    pub rule_of_40: Option<RuleOf40>,
}

impl ValuationReport {
    /// Start building a report for `symbol`.
    pub fn builder(symbol: impl Into<String>) -> ValuationReportBuilder {
        ValuationReportBuilder::new(symbol)
    }

    /// File name the report is written under: `<SYMBOL>_valuation_report.txt`.
    pub fn file_name(&self) -> String {
        format!("{}_valuation_report.txt", self.symbol)
    }

    /// Render the report as text.
    ///
    /// Sections, in order: header, price, PEGY, DCF, comparables, Rule of 40.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("Valuation Report - {}", self.symbol),
            format!("Date: {}", self.date.format("%Y-%m-%d")),
            "-".repeat(RULE_WIDTH),
        ];
        if let Some(price) = self.price {
            lines.push(format!("Current market price: {}", fmt_price(price)));
        }
        lines.push(String::new());

        match &self.pegy {
            Some(pegy) => {
                lines.push(pegy.to_string());
                if pegy.kind == PegKind::Peg {
                    lines.push(
                        "(Dividend yield not available - showing PEG instead of PEGY)".to_string(),
                    );
                }
            }
            None => lines.push("PEGY/PEG: N/A (missing data)".to_string()),
        }
        lines.push(String::new());

        lines.push("Discounted Cash-Flow (DCF)".to_string());
        match &self.dcf {
            Some(dcf) => {
                lines.push(format!("PV of forecast FCFs: {}", fmt_money(dcf.pv_fcfs)));
                lines.push(format!("PV of terminal value: {}", fmt_money(dcf.pv_terminal)));
                lines.push(format!("Total equity value: {}", fmt_money(dcf.total_equity)));
                lines.push(format!(
                    "Intrinsic value per share: {}",
                    fmt_price(dcf.intrinsic_per_share)
                ));
            }
            None => lines.push("DCF: N/A (missing data)".to_string()),
        }
        lines.push(String::new());

        lines.push("Comparable Company Analysis (Comps)".to_string());
        if self.comps.is_empty() {
            lines.push("Comps: N/A (missing or insufficient data)".to_string());
        } else {
            for (multiple, price) in &self.comps {
                let line = match self.average_multiples.get(multiple) {
                    Some(avg) => format!(
                        "Implied price by {}: {} (avg multiple {:.2})",
                        multiple,
                        fmt_price(*price),
                        avg
                    ),
                    None => format!("Implied price by {}: {}", multiple, fmt_price(*price)),
                };
                lines.push(line);
            }
        }
        lines.push(String::new());

        lines.push(
            "Rule of 40 (Revenue Growth Rate (%) + Profitability Margin (%) should be >= 40%)"
                .to_string(),
        );
        match &self.rule_of_40 {
            Some(rule) => lines.push(rule.message.clone()),
            None => lines.push("Rule of 40: N/A (missing or insufficient data)".to_string()),
        }

        lines.join("\n")
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the rendered report into `dir`, returning the file path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.render())?;
        tracing::debug!(path = %path.display(), "Wrote valuation report");
        Ok(path)
    }
}

/// Builder for creating valuation reports.
#[derive(Debug)]
pub struct ValuationReportBuilder {
    symbol: String,
    date: Option<NaiveDate>,
    price: Option<f64>,
    pegy: Option<PegyRatio>,
    dcf: Option<DcfValuation>,
    comps: ComparablesResult,
    average_multiples: BTreeMap<Multiple, f64>,
    rule_of_40: Option<RuleOf40>,
}

impl ValuationReportBuilder {
    /// Create a new report builder.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            date: None,
            price: None,
            pegy: None,
            dcf: None,
            comps: ComparablesResult::new(),
            average_multiples: BTreeMap::new(),
            rule_of_40: None,
        }
    }

    /// Set the report date. Defaults to today.
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the current price.
    pub const fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    /// Set the PEGY ratio.
    pub const fn pegy(mut self, pegy: Option<PegyRatio>) -> Self {
        self.pegy = pegy;
        self
    }

    /// Set the DCF valuation.
    pub const fn dcf(mut self, dcf: Option<DcfValuation>) -> Self {
        self.dcf = dcf;
        self
    }

    /// Set the comparables and the averages they came from.
    pub fn comps(mut self, comps: ComparablesResult, averages: BTreeMap<Multiple, f64>) -> Self {
        self.comps = comps;
        self.average_multiples = averages;
        self
    }

    /// Set the Rule of 40 outcome.
    pub fn rule_of_40(mut self, rule: Option<RuleOf40>) -> Self {
        self.rule_of_40 = rule;
        self
    }

    /// Build the report.
    pub fn build(self) -> ValuationReport {
        ValuationReport {
            symbol: self.symbol,
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            price: self.price,
            pegy: self.pegy,
            dcf: self.dcf,
            comps: self.comps,
            average_multiples: self.average_multiples,
            rule_of_40: self.rule_of_40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lynchpin_valuation::rule_of_40;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_empty_report() {
        let report = ValuationReport::builder("ko").date(date()).build();
        let text = report.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Valuation Report - KO");
        assert_eq!(lines[1], "Date: 2025-06-30");
        assert_eq!(lines[2], "-".repeat(60));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "PEGY/PEG: N/A (missing data)");
        assert!(text.contains("DCF: N/A (missing data)"));
        assert!(text.contains("Comps: N/A (missing or insufficient data)"));
        assert!(text.ends_with("Rule of 40: N/A (missing or insufficient data)"));
        assert_eq!(report.file_name(), "KO_valuation_report.txt");
    }

    #[test]
    fn test_peg_note() {
        let report = ValuationReport::builder("X")
            .date(date())
            .pegy(Some(PegyRatio {
                kind: PegKind::Peg,
                value: 2.0,
            }))
            .build();
        let text = report.render();
        assert!(text.contains("PEG: 2.00\n(Dividend yield not available - showing PEG instead of PEGY)"));
    }

    #[test]
    fn test_rule_of_40_message() {
        let report = ValuationReport::builder("X")
            .date(date())
            .rule_of_40(Some(rule_of_40(25.0, 20.0)))
            .build();
        assert!(report.render().ends_with("Meets Rule of 40 (Score = 45.00%)"));
    }

    #[test]
    fn test_to_json() {
        let report = ValuationReport::builder("X").date(date()).price(Some(1.5)).build();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"symbol\": \"X\""));
        assert!(json.contains("\"date\": \"2025-06-30\""));
    }
}
