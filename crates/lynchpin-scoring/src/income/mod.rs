//! Income scorers.

pub mod dividend;

pub use dividend::{DIVIDEND_YIELD_BANDS, score_dividend_yield};
