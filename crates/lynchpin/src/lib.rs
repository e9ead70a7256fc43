#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lynchpin-rs/lynchpin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod universe;

// Re-export main types from sub-crates
pub use lynchpin_data as data;
pub use lynchpin_output as output;
pub use lynchpin_scoring as scoring;
pub use lynchpin_valuation as valuation;

// Re-export common universe types
pub use universe::{
    Constituent, GicsSector, IndexUniverse, StockIndex, UniverseError, suggest_peers,
    suggest_peers_across, suggest_sector_peers,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
