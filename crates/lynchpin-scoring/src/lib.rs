#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lynchpin-rs/lynchpin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bands;
pub mod classification;
pub mod growth;
pub mod income;
pub mod quality;
pub mod registry;
pub mod scorecard;
pub mod value;

pub use bands::{Band, BandTable, Bound, NOT_AVAILABLE, Score};
pub use classification::{Classification, LynchInputs, classify};
pub use growth::score_earnings_growth;
pub use income::score_dividend_yield;
pub use quality::{score_profit_margin, score_roe};
pub use registry::{
    ScorerCategory, ScorerInfo, available_scorers, get_scorer, scorers_by_category,
};
pub use scorecard::{Aggregate, ScoreCard, ScoredMetric};
pub use value::{score_ev_ebitda, score_pb, score_pe, score_ps};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
