#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lynchpin-rs/lynchpin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod provider;
pub mod snapshot;
pub mod yahoo;

pub use error::{DataError, Result};
pub use provider::{InMemoryProvider, SnapshotProvider};
pub use snapshot::{FinancialSnapshot, Metric, nonzero};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
