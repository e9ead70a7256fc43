//! Growth scorers.

pub mod earnings;

pub use earnings::{EARNINGS_GROWTH_BANDS, score_earnings_growth};
