//! Response model for Yahoo Finance's `quoteSummary` endpoint.
//!
//! Numeric values arrive wrapped as `{"raw": 1.23, "fmt": "1.23"}` and
//! unreported ones as `{}`; both map onto `Option<f64>`.

use crate::error::{DataError, Result};
use crate::snapshot::FinancialSnapshot;
use serde::Deserialize;

/// Modules requested from `quoteSummary`.
pub const SUMMARY_MODULES: &str =
    "price,summaryDetail,defaultKeyStatistics,financialData,assetProfile";

/// A `{"raw": ..}` wrapped number.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawValue {
    /// Unformatted value
    #[serde(default)]
    pub raw: Option<f64>,
}

fn raw(value: Option<RawValue>) -> Option<f64> {
    value.and_then(|v| v.raw)
}

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    /// Summary payload
    pub quote_summary: QuoteSummary,
}

/// Result or error of a summary request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuoteSummary {
    /// One entry per requested symbol
    pub result: Option<Vec<SummaryResult>>,
    /// Error reported by Yahoo
    pub error: Option<SummaryError>,
}

/// Error body returned for unknown symbols and bad requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryError {
    /// Short error code, e.g. "Not Found"
    pub code: String,
    /// Human readable description
    pub description: String,
}

/// The requested modules for one symbol.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryResult {
    /// `price` module
    pub price: Option<PriceModule>,
    /// `summaryDetail` module
    pub summary_detail: Option<SummaryDetail>,
    /// `defaultKeyStatistics` module
    pub default_key_statistics: Option<KeyStatistics>,
    /// `financialData` module
    pub financial_data: Option<FinancialData>,
    /// `assetProfile` module
    pub asset_profile: Option<AssetProfile>,
}

/// `price` module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceModule {
    /// Short company name
    pub short_name: Option<String>,
    /// Regular market price
    pub regular_market_price: Option<RawValue>,
    /// Market capitalization
    pub market_cap: Option<RawValue>,
}

/// `summaryDetail` module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryDetail {
    /// Trailing P/E
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawValue>,
    /// Dividend yield (fraction)
    pub dividend_yield: Option<RawValue>,
    /// Five-year average dividend yield (percent)
    pub five_year_avg_dividend_yield: Option<RawValue>,
    /// Payout ratio
    pub payout_ratio: Option<RawValue>,
    /// Beta
    pub beta: Option<RawValue>,
    /// Market capitalization
    pub market_cap: Option<RawValue>,
    /// Price to sales (TTM)
    #[serde(rename = "priceToSalesTrailing12Months")]
    pub price_to_sales: Option<RawValue>,
}

/// `defaultKeyStatistics` module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyStatistics {
    /// EV / EBITDA
    pub enterprise_to_ebitda: Option<RawValue>,
    /// Price to book
    pub price_to_book: Option<RawValue>,
    /// Shares outstanding
    pub shares_outstanding: Option<RawValue>,
    /// Trailing EPS
    pub trailing_eps: Option<RawValue>,
    /// Quarterly earnings growth (YoY)
    pub earnings_quarterly_growth: Option<RawValue>,
}

/// `financialData` module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialData {
    /// Current price
    pub current_price: Option<RawValue>,
    /// Free cash flow
    pub free_cashflow: Option<RawValue>,
    /// Total debt
    pub total_debt: Option<RawValue>,
    /// Total cash
    pub total_cash: Option<RawValue>,
    /// Total revenue
    pub total_revenue: Option<RawValue>,
    /// EBITDA
    pub ebitda: Option<RawValue>,
    /// Revenue growth
    pub revenue_growth: Option<RawValue>,
    /// Earnings growth
    pub earnings_growth: Option<RawValue>,
    /// Profit margins
    pub profit_margins: Option<RawValue>,
    /// Operating margins
    pub operating_margins: Option<RawValue>,
    /// Return on equity
    pub return_on_equity: Option<RawValue>,
    /// Debt to equity
    pub debt_to_equity: Option<RawValue>,
}

/// `assetProfile` module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetProfile {
    /// Sector label
    pub sector: Option<String>,
    /// Industry label
    pub industry: Option<String>,
}

impl QuoteSummaryResponse {
    /// Convert the response for `symbol` into a snapshot.
    pub fn into_snapshot(self, symbol: &str) -> Result<FinancialSnapshot> {
        if let Some(error) = self.quote_summary.error {
            return Err(if error.code == "Not Found" {
                DataError::InvalidSymbol(symbol.to_string())
            } else {
                DataError::YahooApi(format!("{}: {}", error.code, error.description))
            });
        }

        self.quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .map(|result| result.into_snapshot(symbol))
            .ok_or_else(|| DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "quoteSummary returned no result".to_string(),
            })
    }
}

impl SummaryResult {
    /// Flatten the modules into a snapshot.
    pub fn into_snapshot(self, symbol: &str) -> FinancialSnapshot {
        let price = self.price.unwrap_or_default();
        let detail = self.summary_detail.unwrap_or_default();
        let stats = self.default_key_statistics.unwrap_or_default();
        let financial = self.financial_data.unwrap_or_default();
        let profile = self.asset_profile.unwrap_or_default();

        FinancialSnapshot {
            symbol: symbol.to_uppercase(),
            short_name: price.short_name,
            sector: profile.sector,
            industry: profile.industry,
            current_price: raw(financial.current_price).or(raw(price.regular_market_price)),
            trailing_pe: raw(detail.trailing_pe),
            enterprise_to_ebitda: raw(stats.enterprise_to_ebitda),
            price_to_book: raw(stats.price_to_book),
            price_to_sales: raw(detail.price_to_sales),
            free_cash_flow: raw(financial.free_cashflow),
            shares_outstanding: raw(stats.shares_outstanding),
            total_debt: raw(financial.total_debt),
            total_cash: raw(financial.total_cash),
            trailing_eps: raw(stats.trailing_eps),
            total_revenue: raw(financial.total_revenue),
            ebitda: raw(financial.ebitda),
            dividend_yield: raw(detail.dividend_yield),
            // Yahoo reports the five-year average in percent, unlike the current yield.
            five_year_avg_dividend_yield: raw(detail.five_year_avg_dividend_yield)
                .map(|pct| pct / 100.0),
            payout_ratio: raw(detail.payout_ratio),
            beta: raw(detail.beta),
            market_cap: raw(detail.market_cap).or(raw(price.market_cap)),
            revenue_growth: raw(financial.revenue_growth),
            earnings_growth: raw(financial.earnings_growth),
            earnings_quarterly_growth: raw(stats.earnings_quarterly_growth),
            profit_margins: raw(financial.profit_margins),
            operating_margins: raw(financial.operating_margins),
            return_on_equity: raw(financial.return_on_equity),
            debt_to_equity: raw(financial.debt_to_equity),
        }
    }
}
