#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lynchpin-rs/lynchpin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod comps;
pub mod dcf;
pub mod error;
pub mod pegy;
pub mod projection;
pub mod rule_of_40;

pub use comps::{ComparablesResult, Multiple, PeerMultiples, apply_comps, collect_peer_multiples};
pub use dcf::{DcfAssumptions, DcfInputs, DcfValuation, calculate_dcf, dcf_from_snapshot};
pub use error::{Result, ValuationError};
pub use pegy::{PegKind, PegSignal, PegyRatio, calculate_pegy, pegy_from_snapshot};
pub use projection::{
    MAX_PROJECTION_YEARS, ProjectionInputs, Scenario, ScenarioProjection, project_scenarios,
};
pub use rule_of_40::{RuleOf40, rule_of_40, rule_of_40_from_snapshot};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
