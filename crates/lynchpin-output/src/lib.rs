#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lynchpin-rs/lynchpin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod format;
pub mod report;
pub mod summary;

pub use export::{
    ExportError, TradeRecord, YAHOO_HEADERS, YahooTradeRow, convert_trade_file, convert_trades,
    parse_datetime, read_trades,
};
pub use format::{fmt_grouped, fmt_money, fmt_percent, fmt_price};
pub use report::{ReportError, ValuationReport, ValuationReportBuilder};
pub use summary::{render_classification, render_projections, render_scorecard};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
