//! The provider seam between valuation code and market data.

use crate::error::{DataError, Result};
use crate::snapshot::FinancialSnapshot;
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;

/// Source of financial snapshots, one ticker at a time.
///
/// Implementations make a single best-effort attempt per call. Callers decide
/// whether a failure aborts the run or is reported and skipped.
pub trait SnapshotProvider {
    /// Fetch the current snapshot for `symbol`.
    fn fetch_snapshot(&self, symbol: &str) -> impl Future<Output = Result<FinancialSnapshot>> + Send;
}

impl<P: SnapshotProvider + Sync> SnapshotProvider for &P {
    fn fetch_snapshot(&self, symbol: &str) -> impl Future<Output = Result<FinancialSnapshot>> + Send {
        (**self).fetch_snapshot(symbol)
    }
}

/// Provider backed by snapshots held in memory.
///
/// Used for offline runs (loaded from a JSON file) and in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    snapshots: HashMap<String, FinancialSnapshot>,
}

impl InMemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider from a list of snapshots, keyed by upper-cased symbol.
    pub fn from_snapshots(snapshots: impl IntoIterator<Item = FinancialSnapshot>) -> Self {
        let mut provider = Self::new();
        for snapshot in snapshots {
            provider.insert(snapshot);
        }
        provider
    }

    /// Load snapshots from a JSON file holding an array of snapshots.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse snapshots from a JSON array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshots: Vec<FinancialSnapshot> = serde_json::from_str(json)?;
        Ok(Self::from_snapshots(snapshots))
    }

    /// Add or replace a snapshot.
    pub fn insert(&mut self, snapshot: FinancialSnapshot) {
        self.snapshots
            .insert(snapshot.symbol.to_uppercase(), snapshot);
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the provider holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn lookup(&self, symbol: &str) -> Result<FinancialSnapshot> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }
        self.snapshots
            .get(&symbol.to_uppercase())
            .cloned()
            .ok_or_else(|| DataError::InvalidSymbol(symbol.to_string()))
    }
}

impl SnapshotProvider for InMemoryProvider {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<FinancialSnapshot> {
        self.lookup(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Metric;
    use std::io::Write;

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let provider = InMemoryProvider::from_snapshots([
            FinancialSnapshot::new("AAPL").with(Metric::TrailingPe, 30.0)
        ]);
        let snapshot = provider.fetch_snapshot("aapl").await.unwrap();
        assert_eq!(snapshot.trailing_pe, Some(30.0));
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let provider = InMemoryProvider::new();
        let result = provider.fetch_snapshot("NOPE").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }

    #[tokio::test]
    async fn test_empty_symbol() {
        let provider = InMemoryProvider::new();
        let result = provider.fetch_snapshot("").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }

    #[tokio::test]
    async fn test_provider_by_reference() {
        let provider = InMemoryProvider::from_snapshots([FinancialSnapshot::new("KO")]);
        let by_ref = &provider;
        assert!(by_ref.fetch_snapshot("KO").await.is_ok());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"symbol": "MSFT", "trailingPE": 35.2}}, {{"symbol": "GOOG"}}]"#
        )
        .unwrap();

        let provider = InMemoryProvider::from_json_file(file.path()).unwrap();
        assert_eq!(provider.len(), 2);
        assert!(!provider.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = InMemoryProvider::from_json_str("not json");
        assert!(matches!(result, Err(DataError::Serialization(_))));
    }
}
