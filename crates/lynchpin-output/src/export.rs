//! Trade history export.
//!
//! Converts a broker trade report into the CSV layout accepted by Yahoo
//! Finance's portfolio import.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

/// Column headers of the converted report, in order.
pub const YAHOO_HEADERS: [&str; 17] = [
    "Symbol",
    "Current Price",
    "Date",
    "Time",
    "Change",
    "Open",
    "High",
    "Low",
    "Volume",
    "Trade Date",
    "Purchase Price",
    "Quantity",
    "Commission",
    "High Limit",
    "Low Limit",
    "Comment",
    "Transaction Type",
];

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One row of the broker's trade report.
///
/// Only the columns the conversion reads are listed; others are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TradeRecord {
    /// Ticker symbol.
    #[serde(rename = "Symbol")]
    pub symbol: String,

    /// Execution time as `YYYY-MM-DD,HHMM ZONE`.
    #[serde(rename = "Date/Time")]
    pub date_time: String,

    /// Trade date as `YYYY-MM-DD`.
    #[serde(rename = "TradeDate")]
    pub trade_date: String,

    /// Execution price.
    #[serde(rename = "Price")]
    pub price: String,

    /// Number of shares.
    #[serde(rename = "Quantity")]
    pub quantity: String,

    /// Commission paid.
    #[serde(rename = "Commission")]
    pub commission: String,

    /// `BUY` or `SELL`.
    #[serde(rename = "Buy/Sell")]
    pub side: String,
}

/// One row of the converted report. Columns the broker does not supply stay
/// blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YahooTradeRow {
    /// Ticker symbol.
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Current Price")]
    current_price: String,
    /// Execution date as `YYYY/MM/DD`.
    #[serde(rename = "Date")]
    pub date: String,
    /// Execution time as `HH:MM ZONE`.
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Change")]
    change: String,
    #[serde(rename = "Open")]
    open: String,
    #[serde(rename = "High")]
    high: String,
    #[serde(rename = "Low")]
    low: String,
    #[serde(rename = "Volume")]
    volume: String,
    /// Trade date as `YYYYMMDD`.
    #[serde(rename = "Trade Date")]
    pub trade_date: String,
    /// Execution price.
    #[serde(rename = "Purchase Price")]
    pub purchase_price: String,
    /// Number of shares.
    #[serde(rename = "Quantity")]
    pub quantity: String,
    /// Commission paid.
    #[serde(rename = "Commission")]
    pub commission: String,
    #[serde(rename = "High Limit")]
    high_limit: String,
    #[serde(rename = "Low Limit")]
    low_limit: String,
    #[serde(rename = "Comment")]
    comment: String,
    /// `BUY` or `SELL`.
    #[serde(rename = "Transaction Type")]
    pub transaction_type: String,
}

impl From<&TradeRecord> for YahooTradeRow {
    fn from(record: &TradeRecord) -> Self {
        let (date, time) = parse_datetime(&record.date_time);
        Self {
            symbol: record.symbol.clone(),
            date,
            time,
            trade_date: record.trade_date.replace('-', ""),
            purchase_price: record.price.clone(),
            quantity: record.quantity.clone(),
            commission: record.commission.clone(),
            transaction_type: record.side.clone(),
            ..Self::default()
        }
    }
}

/// Split a broker timestamp into Yahoo's date and time columns.
///
/// `2024-03-15,0930 EST` becomes `("2024/03/15", "09:30 EST")`. Anything
/// else, including a missing zone, yields two empty strings.
///
/// The zone is a label copied from the input; the time is not shifted.
pub fn parse_datetime(value: &str) -> (String, String) {
    let Some((date_time, zone)) = value.trim().rsplit_once(' ') else {
        return (String::new(), String::new());
    };
    if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphabetic()) {
        return (String::new(), String::new());
    }

    match NaiveDateTime::parse_from_str(date_time, "%Y-%m-%d,%H%M") {
        Ok(dt) => (
            dt.format("%Y/%m/%d").to_string(),
            format!("{} {}", dt.format("%H:%M"), zone),
        ),
        Err(_) => (String::new(), String::new()),
    }
}

fn write_rows<W: Write>(writer: W, rows: &[YahooTradeRow]) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(YAHOO_HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a broker trade report.
pub fn read_trades<R: Read>(reader: R) -> Result<Vec<TradeRecord>, ExportError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Convert a broker trade report, returning the number of rows written.
///
/// The header row is written even when the input has no trades.
pub fn convert_trades<R: Read, W: Write>(reader: R, writer: W) -> Result<usize, ExportError> {
    let rows: Vec<YahooTradeRow> = read_trades(reader)?
        .iter()
        .map(YahooTradeRow::from)
        .collect();
    write_rows(writer, &rows)?;
    Ok(rows.len())
}

/// Convert the trade report at `input` and write the result to `output`.
pub fn convert_trade_file(input: &Path, output: &Path) -> Result<usize, ExportError> {
    let reader = File::open(input)?;
    let writer = File::create(output)?;
    let count = convert_trades(reader, writer)?;
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        rows = count,
        "Converted trade report"
    );
    Ok(count)
}
