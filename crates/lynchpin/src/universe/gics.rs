//! GICS (Global Industry Classification Standard) sector definitions.

use super::UniverseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GICS Level 1 sectors (11 sectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GicsSector {
    /// Information Technology
    InformationTechnology,

    /// Health Care
    HealthCare,

    /// Financials
    Financials,

    /// Consumer Discretionary
    ConsumerDiscretionary,

    /// Communication Services
    CommunicationServices,

    /// Industrials
    Industrials,

    /// Consumer Staples
    ConsumerStaples,

    /// Energy
    Energy,

    /// Utilities
    Utilities,

    /// Real Estate
    RealEstate,

    /// Materials
    Materials,
}

impl GicsSector {
    /// Returns the full sector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InformationTechnology => "Information Technology",
            Self::HealthCare => "Health Care",
            Self::Financials => "Financials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::CommunicationServices => "Communication Services",
            Self::Industrials => "Industrials",
            Self::ConsumerStaples => "Consumer Staples",
            Self::Energy => "Energy",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
            Self::Materials => "Materials",
        }
    }

    /// Map a Yahoo Finance sector label onto its GICS sector.
    ///
    /// Yahoo uses Morningstar names ("Technology", "Consumer Cyclical",
    /// "Basic Materials"); the GICS names are accepted as well.
    pub fn from_yahoo_sector(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "technology" | "information technology" => Some(Self::InformationTechnology),
            "healthcare" | "health care" => Some(Self::HealthCare),
            "financial services" | "financials" | "financial" => Some(Self::Financials),
            "consumer cyclical" | "consumer discretionary" => Some(Self::ConsumerDiscretionary),
            "communication services" => Some(Self::CommunicationServices),
            "industrials" => Some(Self::Industrials),
            "consumer defensive" | "consumer staples" => Some(Self::ConsumerStaples),
            "energy" => Some(Self::Energy),
            "utilities" => Some(Self::Utilities),
            "real estate" => Some(Self::RealEstate),
            "basic materials" | "materials" => Some(Self::Materials),
            _ => None,
        }
    }
}

impl fmt::Display for GicsSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GicsSector {
    type Err = UniverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_yahoo_sector(s).ok_or_else(|| UniverseError::UnknownSector(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Technology", GicsSector::InformationTechnology)]
    #[case("Consumer Cyclical", GicsSector::ConsumerDiscretionary)]
    #[case("consumer defensive", GicsSector::ConsumerStaples)]
    #[case("Financial Services", GicsSector::Financials)]
    #[case("Basic Materials", GicsSector::Materials)]
    #[case("Health Care", GicsSector::HealthCare)]
    fn test_from_yahoo_sector(#[case] label: &str, #[case] expected: GicsSector) {
        assert_eq!(GicsSector::from_yahoo_sector(label), Some(expected));
    }

    #[test]
    fn test_parse_unknown_sector() {
        assert!("Crypto".parse::<GicsSector>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", GicsSector::InformationTechnology),
            "Information Technology"
        );
        assert_eq!(format!("{}", GicsSector::Energy), "Energy");
    }
}
