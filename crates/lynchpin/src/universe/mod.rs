//! Stock universes used to suggest comparable peers.
//!
//! Each supported index carries a curated list of constituents tagged with
//! a GICS sector and one or more industry labels. Peer suggestion matches a
//! target's industry against those labels.

pub mod constituents;
pub mod gics;
pub mod peers;

pub use constituents::{Constituent, IndexUniverse};
pub use gics::GicsSector;
pub use peers::{
    DEFAULT_MAX_PEERS, is_partial_match, merge_peers, suggest_peers, suggest_peers_across,
    suggest_sector_peers,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing universe identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    /// Index name not recognised.
    #[error("Unknown index: {0}")]
    UnknownIndex(String),

    /// Sector name not recognised.
    #[error("Unknown sector: {0}")]
    UnknownSector(String),
}

/// Supported stock indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockIndex {
    /// S&P 500
    Sp500,
    /// DAX 40
    Dax,
    /// FTSE 100
    Ftse100,
}

impl StockIndex {
    /// All indexes, in the order peers are searched.
    pub const ALL: [Self; 3] = [Self::Sp500, Self::Dax, Self::Ftse100];

    /// Index name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sp500 => "S&P 500",
            Self::Dax => "DAX",
            Self::Ftse100 => "FTSE 100",
        }
    }
}

impl fmt::Display for StockIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StockIndex {
    type Err = UniverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "sp500" | "sandp500" => Ok(Self::Sp500),
            "dax" | "dax40" => Ok(Self::Dax),
            "ftse100" | "ftse" => Ok(Self::Ftse100),
            _ => Err(UniverseError::UnknownIndex(s.to_string())),
        }
    }
}
