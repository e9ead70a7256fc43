//! The financial snapshot every valuation routine reads from.
//!
//! A snapshot is a flat record of independently optional metrics for one
//! ticker, fetched fresh on every run. `None` means the provider did not
//! report the metric; it is never a stand-in for zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric metrics carried by a [`FinancialSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    /// Last traded price
    CurrentPrice,
    /// Trailing twelve-month price to earnings
    TrailingPe,
    /// Enterprise value to EBITDA
    EnterpriseToEbitda,
    /// Price to book
    PriceToBook,
    /// Price to sales (TTM)
    PriceToSales,
    /// Free cash flow (TTM)
    FreeCashFlow,
    /// Shares outstanding
    SharesOutstanding,
    /// Total debt
    TotalDebt,
    /// Total cash
    TotalCash,
    /// Trailing earnings per share
    TrailingEps,
    /// Total revenue (TTM)
    TotalRevenue,
    /// EBITDA (TTM)
    Ebitda,
    /// Dividend yield as a fraction
    DividendYield,
    /// Five-year average dividend yield as a fraction
    FiveYearAvgDividendYield,
    /// Dividend payout ratio
    PayoutRatio,
    /// Five-year monthly beta
    Beta,
    /// Market capitalization
    MarketCap,
    /// Year-over-year revenue growth
    RevenueGrowth,
    /// Year-over-year earnings growth
    EarningsGrowth,
    /// Quarterly year-over-year earnings growth
    EarningsQuarterlyGrowth,
    /// Net profit margin
    ProfitMargins,
    /// Operating margin
    OperatingMargins,
    /// Return on equity
    ReturnOnEquity,
    /// Debt to equity, in percent as Yahoo reports it
    DebtToEquity,
}

impl Metric {
    /// Every numeric metric, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::CurrentPrice,
        Self::TrailingPe,
        Self::EnterpriseToEbitda,
        Self::PriceToBook,
        Self::PriceToSales,
        Self::FreeCashFlow,
        Self::SharesOutstanding,
        Self::TotalDebt,
        Self::TotalCash,
        Self::TrailingEps,
        Self::TotalRevenue,
        Self::Ebitda,
        Self::DividendYield,
        Self::FiveYearAvgDividendYield,
        Self::PayoutRatio,
        Self::Beta,
        Self::MarketCap,
        Self::RevenueGrowth,
        Self::EarningsGrowth,
        Self::EarningsQuarterlyGrowth,
        Self::ProfitMargins,
        Self::OperatingMargins,
        Self::ReturnOnEquity,
        Self::DebtToEquity,
    ];

    /// The Yahoo Finance key for this metric.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CurrentPrice => "currentPrice",
            Self::TrailingPe => "trailingPE",
            Self::EnterpriseToEbitda => "enterpriseToEbitda",
            Self::PriceToBook => "priceToBook",
            Self::PriceToSales => "priceToSalesTrailing12Months",
            Self::FreeCashFlow => "freeCashflow",
            Self::SharesOutstanding => "sharesOutstanding",
            Self::TotalDebt => "totalDebt",
            Self::TotalCash => "totalCash",
            Self::TrailingEps => "trailingEps",
            Self::TotalRevenue => "totalRevenue",
            Self::Ebitda => "ebitda",
            Self::DividendYield => "dividendYield",
            Self::FiveYearAvgDividendYield => "fiveYearAvgDividendYield",
            Self::PayoutRatio => "payoutRatio",
            Self::Beta => "beta",
            Self::MarketCap => "marketCap",
            Self::RevenueGrowth => "revenueGrowth",
            Self::EarningsGrowth => "earningsGrowth",
            Self::EarningsQuarterlyGrowth => "earningsQuarterlyGrowth",
            Self::ProfitMargins => "profitMargins",
            Self::OperatingMargins => "operatingMargins",
            Self::ReturnOnEquity => "returnOnEquity",
            Self::DebtToEquity => "debtToEquity",
        }
    }

    /// Look up a metric by its Yahoo Finance key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Treat zero as "not reported".
///
/// Several formulas follow the convention that a zero metric is as good as a
/// missing one. This conflates a real zero (no dividend, say) with absence, so
/// it is applied only where those formulas need it.
pub fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Point-in-time financial metrics for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialSnapshot {
    /// Ticker symbol
    pub symbol: String,
    /// Short company name
    pub short_name: Option<String>,
    /// Sector label
    pub sector: Option<String>,
    /// Industry label
    pub industry: Option<String>,
    /// Last traded price
    pub current_price: Option<f64>,
    /// Trailing P/E
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    /// Enterprise value to EBITDA
    pub enterprise_to_ebitda: Option<f64>,
    /// Price to book
    pub price_to_book: Option<f64>,
    /// Price to sales (TTM)
    #[serde(rename = "priceToSalesTrailing12Months")]
    pub price_to_sales: Option<f64>,
    /// Free cash flow (TTM)
    #[serde(rename = "freeCashflow")]
    pub free_cash_flow: Option<f64>,
    /// Shares outstanding
    pub shares_outstanding: Option<f64>,
    /// Total debt
    pub total_debt: Option<f64>,
    /// Total cash
    pub total_cash: Option<f64>,
    /// Trailing EPS
    pub trailing_eps: Option<f64>,
    /// Total revenue (TTM)
    pub total_revenue: Option<f64>,
    /// EBITDA (TTM)
    pub ebitda: Option<f64>,
    /// Dividend yield as a fraction
    pub dividend_yield: Option<f64>,
    /// Five-year average dividend yield as a fraction
    pub five_year_avg_dividend_yield: Option<f64>,
    /// Payout ratio
    pub payout_ratio: Option<f64>,
    /// Beta
    pub beta: Option<f64>,
    /// Market capitalization
    pub market_cap: Option<f64>,
    /// Revenue growth (YoY)
    pub revenue_growth: Option<f64>,
    /// Earnings growth (YoY)
    pub earnings_growth: Option<f64>,
    /// Quarterly earnings growth (YoY)
    pub earnings_quarterly_growth: Option<f64>,
    /// Profit margins
    pub profit_margins: Option<f64>,
    /// Operating margins
    pub operating_margins: Option<f64>,
    /// Return on equity
    pub return_on_equity: Option<f64>,
    /// Debt to equity (percent)
    pub debt_to_equity: Option<f64>,
}

impl FinancialSnapshot {
    /// Create an empty snapshot for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Read a metric.
    pub const fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::CurrentPrice => self.current_price,
            Metric::TrailingPe => self.trailing_pe,
            Metric::EnterpriseToEbitda => self.enterprise_to_ebitda,
            Metric::PriceToBook => self.price_to_book,
            Metric::PriceToSales => self.price_to_sales,
            Metric::FreeCashFlow => self.free_cash_flow,
            Metric::SharesOutstanding => self.shares_outstanding,
            Metric::TotalDebt => self.total_debt,
            Metric::TotalCash => self.total_cash,
            Metric::TrailingEps => self.trailing_eps,
            Metric::TotalRevenue => self.total_revenue,
            Metric::Ebitda => self.ebitda,
            Metric::DividendYield => self.dividend_yield,
            Metric::FiveYearAvgDividendYield => self.five_year_avg_dividend_yield,
            Metric::PayoutRatio => self.payout_ratio,
            Metric::Beta => self.beta,
            Metric::MarketCap => self.market_cap,
            Metric::RevenueGrowth => self.revenue_growth,
            Metric::EarningsGrowth => self.earnings_growth,
            Metric::EarningsQuarterlyGrowth => self.earnings_quarterly_growth,
            Metric::ProfitMargins => self.profit_margins,
            Metric::OperatingMargins => self.operating_margins,
            Metric::ReturnOnEquity => self.return_on_equity,
            Metric::DebtToEquity => self.debt_to_equity,
        }
    }

    /// Read a metric, treating zero as missing.
    pub fn present(&self, metric: Metric) -> Option<f64> {
        nonzero(self.get(metric))
    }

    /// Overwrite a metric.
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        let slot = match metric {
            Metric::CurrentPrice => &mut self.current_price,
            Metric::TrailingPe => &mut self.trailing_pe,
            Metric::EnterpriseToEbitda => &mut self.enterprise_to_ebitda,
            Metric::PriceToBook => &mut self.price_to_book,
            Metric::PriceToSales => &mut self.price_to_sales,
            Metric::FreeCashFlow => &mut self.free_cash_flow,
            Metric::SharesOutstanding => &mut self.shares_outstanding,
            Metric::TotalDebt => &mut self.total_debt,
            Metric::TotalCash => &mut self.total_cash,
            Metric::TrailingEps => &mut self.trailing_eps,
            Metric::TotalRevenue => &mut self.total_revenue,
            Metric::Ebitda => &mut self.ebitda,
            Metric::DividendYield => &mut self.dividend_yield,
            Metric::FiveYearAvgDividendYield => &mut self.five_year_avg_dividend_yield,
            Metric::PayoutRatio => &mut self.payout_ratio,
            Metric::Beta => &mut self.beta,
            Metric::MarketCap => &mut self.market_cap,
            Metric::RevenueGrowth => &mut self.revenue_growth,
            Metric::EarningsGrowth => &mut self.earnings_growth,
            Metric::EarningsQuarterlyGrowth => &mut self.earnings_quarterly_growth,
            Metric::ProfitMargins => &mut self.profit_margins,
            Metric::OperatingMargins => &mut self.operating_margins,
            Metric::ReturnOnEquity => &mut self.return_on_equity,
            Metric::DebtToEquity => &mut self.debt_to_equity,
        };
        *slot = value;
    }

    /// Builder-style setter.
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, Some(value));
        self
    }

    /// Builder-style sector setter.
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Builder-style industry setter.
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Display name, falling back to the symbol.
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.symbol)
    }

    /// Number of numeric metrics that are reported.
    pub fn reported_count(&self) -> usize {
        Metric::ALL
            .iter()
            .filter(|m| self.get(**m).is_some())
            .count()
    }
}
