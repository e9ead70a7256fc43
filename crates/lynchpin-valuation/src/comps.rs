//! Comparable company analysis.
//!
//! Peer multiples are fetched one peer at a time, averaged, and applied to
//! the target's own earnings, revenue and EBITDA to imply a share price.

use crate::error::ValuationError;
use lynchpin_data::{FinancialSnapshot, Metric, SnapshotProvider, nonzero};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Valuation multiple used for comparables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Multiple {
    /// Price to earnings
    #[serde(rename = "P/E")]
    Pe,
    /// Price to sales
    #[serde(rename = "P/S")]
    Ps,
    /// Enterprise value to EBITDA
    #[serde(rename = "EV/EBITDA")]
    EvEbitda,
}

impl Multiple {
    /// All supported multiples.
    pub const ALL: [Self; 3] = [Self::Pe, Self::Ps, Self::EvEbitda];

    /// Display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pe => "P/E",
            Self::Ps => "P/S",
            Self::EvEbitda => "EV/EBITDA",
        }
    }

    /// Snapshot metric holding this multiple.
    pub const fn metric(&self) -> Metric {
        match self {
            Self::Pe => Metric::TrailingPe,
            Self::Ps => Metric::PriceToSales,
            Self::EvEbitda => Metric::EnterpriseToEbitda,
        }
    }

    /// Parse a comma-separated list, skipping unknown entries.
    pub fn parse_list(input: &str) -> Vec<Self> {
        let mut multiples = Vec::new();
        for multiple in input.split(',').filter_map(|m| m.parse().ok()) {
            if !multiples.contains(&multiple) {
                multiples.push(multiple);
            }
        }
        multiples
    }
}

impl fmt::Display for Multiple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Multiple {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "P/E" | "PE" => Ok(Self::Pe),
            "P/S" | "PS" => Ok(Self::Ps),
            "EV/EBITDA" | "EV_EBITDA" => Ok(Self::EvEbitda),
            other => Err(ValuationError::UnknownMultiple(other.to_string())),
        }
    }
}

/// Implied price per share for each multiple that could be applied.
pub type ComparablesResult = BTreeMap<Multiple, f64>;

/// Multiples gathered from peers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeerMultiples {
    values: BTreeMap<Multiple, Vec<f64>>,
    failed: Vec<String>,
}

impl PeerMultiples {
    /// Create an empty collection for the chosen multiples.
    pub fn new(multiples: &[Multiple]) -> Self {
        Self {
            values: multiples.iter().map(|m| (*m, Vec::new())).collect(),
            failed: Vec::new(),
        }
    }

    /// Record a peer's multiples. Missing or zero multiples are skipped.
    pub fn record(&mut self, snapshot: &FinancialSnapshot) {
        for (multiple, values) in &mut self.values {
            if let Some(value) = snapshot.present(multiple.metric()) {
                values.push(value);
            }
        }
    }

    /// Record a peer whose fetch failed.
    pub fn record_failure(&mut self, symbol: impl Into<String>) {
        self.failed.push(symbol.into());
    }

    /// Values collected for a multiple.
    pub fn get(&self, multiple: Multiple) -> &[f64] {
        self.values.get(&multiple).map(Vec::as_slice).unwrap_or_default()
    }

    /// Peers whose fetch failed.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Mean of each multiple that has at least one value.
    pub fn averages(&self) -> BTreeMap<Multiple, f64> {
        self.values
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(multiple, values)| {
                (*multiple, values.iter().sum::<f64>() / values.len() as f64)
            })
            .collect()
    }
}

/// Fetch the chosen multiples for each peer, sequentially.
///
/// Peers that fail to fetch are logged and skipped.
pub async fn collect_peer_multiples<P, S>(
    provider: &P,
    tickers: &[S],
    multiples: &[Multiple],
) -> PeerMultiples
where
    P: SnapshotProvider + Sync,
    S: AsRef<str> + Sync,
{
    let mut collected = PeerMultiples::new(multiples);

    for ticker in tickers {
        let ticker = ticker.as_ref();
        match provider.fetch_snapshot(ticker).await {
            Ok(snapshot) => {
                tracing::debug!(peer = ticker, "Collected peer multiples");
                collected.record(&snapshot);
            }
            Err(e) => {
                tracing::warn!(peer = ticker, error = %e, "Skipping peer");
                collected.record_failure(ticker);
            }
        }
    }

    collected
}

/// Apply peer-average multiples to the target.
///
/// Returns an empty map when shares outstanding is missing. Each multiple is
/// omitted when the target lacks the figure it scales. Missing debt or cash
/// count as zero.
pub fn apply_comps(
    target: &FinancialSnapshot,
    averages: &BTreeMap<Multiple, f64>,
) -> ComparablesResult {
    let mut implied = ComparablesResult::new();
    let Some(shares) = target.present(Metric::SharesOutstanding) else {
        return implied;
    };

    for (&multiple, &average) in averages {
        let price = match multiple {
            Multiple::Pe => target.present(Metric::TrailingEps).map(|eps| average * eps),
            Multiple::Ps => target
                .present(Metric::TotalRevenue)
                .map(|revenue| average * revenue / shares),
            Multiple::EvEbitda => target.present(Metric::Ebitda).map(|ebitda| {
                let debt = nonzero(target.total_debt).unwrap_or(0.0);
                let cash = nonzero(target.total_cash).unwrap_or(0.0);
                (average * ebitda - debt + cash) / shares
            }),
        };

        if let Some(price) = price {
            implied.insert(multiple, price);
        }
    }

    implied
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lynchpin_data::InMemoryProvider;

    fn target() -> FinancialSnapshot {
        FinancialSnapshot::new("TGT")
            .with(Metric::SharesOutstanding, 100.0)
            .with(Metric::TrailingEps, 2.0)
            .with(Metric::TotalRevenue, 1000.0)
            .with(Metric::Ebitda, 200.0)
            .with(Metric::TotalDebt, 300.0)
            .with(Metric::TotalCash, 100.0)
    }

    #[test]
    fn test_parse_multiple() {
        assert_eq!("p/e".parse::<Multiple>().unwrap(), Multiple::Pe);
        assert_eq!(" EV/EBITDA ".parse::<Multiple>().unwrap(), Multiple::EvEbitda);
        assert!("P/B".parse::<Multiple>().is_err());
        assert_eq!(
            Multiple::parse_list("P/E, p/s,P/B,P/E"),
            vec![Multiple::Pe, Multiple::Ps]
        );
    }

    #[test]
    fn test_apply_pe() {
        let averages = BTreeMap::from([(Multiple::Pe, 15.0)]);
        let implied = apply_comps(&target(), &averages);
        assert_relative_eq!(implied[&Multiple::Pe], 30.0);
    }

    #[test]
    fn test_apply_ps_and_ev_ebitda() {
        let averages = BTreeMap::from([(Multiple::Ps, 3.0), (Multiple::EvEbitda, 10.0)]);
        let implied = apply_comps(&target(), &averages);
        assert_relative_eq!(implied[&Multiple::Ps], 30.0);
        // (10 * 200 - 300 + 100) / 100
        assert_relative_eq!(implied[&Multiple::EvEbitda], 18.0);
    }

    #[test]
    fn test_ev_ebitda_without_debt_or_cash() {
        let snapshot = FinancialSnapshot::new("TGT")
            .with(Metric::SharesOutstanding, 100.0)
            .with(Metric::Ebitda, 200.0);
        let averages = BTreeMap::from([(Multiple::EvEbitda, 10.0)]);
        assert_relative_eq!(apply_comps(&snapshot, &averages)[&Multiple::EvEbitda], 20.0);
    }

    #[test]
    fn test_missing_shares_yields_empty() {
        let snapshot = FinancialSnapshot::new("TGT").with(Metric::TrailingEps, 2.0);
        let averages = BTreeMap::from([(Multiple::Pe, 15.0)]);
        assert!(apply_comps(&snapshot, &averages).is_empty());
    }

    #[test]
    fn test_missing_figure_omits_multiple() {
        let snapshot = FinancialSnapshot::new("TGT")
            .with(Metric::SharesOutstanding, 100.0)
            .with(Metric::TrailingEps, 2.0);
        let averages = BTreeMap::from([(Multiple::Pe, 15.0), (Multiple::Ps, 3.0)]);
        let implied = apply_comps(&snapshot, &averages);
        assert_eq!(implied.len(), 1);
        assert!(implied.contains_key(&Multiple::Pe));
    }

    #[test]
    fn test_averages_skip_empty() {
        let mut peers = PeerMultiples::new(&[Multiple::Pe, Multiple::Ps]);
        peers.record(&FinancialSnapshot::new("A").with(Metric::TrailingPe, 10.0));
        peers.record(&FinancialSnapshot::new("B").with(Metric::TrailingPe, 20.0));
        let averages = peers.averages();
        assert_relative_eq!(averages[&Multiple::Pe], 15.0);
        assert!(!averages.contains_key(&Multiple::Ps));
    }

    #[tokio::test]
    async fn test_collect_skips_failed_and_zero_peers() {
        let provider = InMemoryProvider::from_snapshots([
            FinancialSnapshot::new("A")
                .with(Metric::TrailingPe, 10.0)
                .with(Metric::PriceToSales, 2.0),
            FinancialSnapshot::new("B")
                .with(Metric::TrailingPe, 0.0)
                .with(Metric::PriceToSales, 4.0),
        ]);

        let peers = collect_peer_multiples(
            &provider,
            &["A", "B", "MISSING"],
            &[Multiple::Pe, Multiple::Ps],
        )
        .await;

        assert_eq!(peers.get(Multiple::Pe), &[10.0]);
        assert_eq!(peers.get(Multiple::Ps), &[2.0, 4.0]);
        assert_eq!(peers.get(Multiple::EvEbitda), &[] as &[f64]);
        assert_eq!(peers.failed(), &["MISSING".to_string()]);
    }
}
