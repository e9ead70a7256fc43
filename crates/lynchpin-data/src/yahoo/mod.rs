//! Yahoo Finance data provider.

pub mod provider;
pub mod summary;

pub use provider::YahooProvider;
pub use summary::QuoteSummaryResponse;
