//! Quality scorers: profitability and returns on capital.

pub mod margin;
pub mod roe;

pub use margin::{PROFIT_MARGIN_BANDS, score_profit_margin};
pub use roe::{ROE_BANDS, score_roe};
