//! Snapshot providers used by the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use lynchpin_data::{FinancialSnapshot, InMemoryProvider, Result, SnapshotProvider};
use lynchpin_data::yahoo::YahooProvider;
use std::path::Path;
use std::time::Duration;

/// Either the live Yahoo provider or snapshots loaded from a file.
#[derive(Debug)]
pub(crate) enum AnyProvider {
    /// Yahoo Finance quoteSummary.
    Yahoo(Box<YahooProvider>),
    /// Snapshots from `--snapshots`.
    Offline(InMemoryProvider),
}

impl AnyProvider {
    /// Offline provider when a snapshot file is given, Yahoo otherwise.
    pub(crate) fn from_args(snapshots: Option<&Path>) -> Result<Self> {
        match snapshots {
            Some(path) => {
                let provider = InMemoryProvider::from_json_file(path)?;
                tracing::info!(path = %path.display(), count = provider.len(), "Loaded snapshots");
                Ok(Self::Offline(provider))
            }
            None => Ok(Self::Yahoo(Box::new(YahooProvider::new()?))),
        }
    }
}

impl SnapshotProvider for AnyProvider {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<FinancialSnapshot> {
        match self {
            Self::Yahoo(provider) => provider.fetch_snapshot(symbol).await,
            Self::Offline(provider) => provider.fetch_snapshot(symbol).await,
        }
    }
}

/// Wraps a provider and advances a progress bar after each fetch.
#[derive(Debug)]
pub(crate) struct ProgressProvider<'a, P> {
    inner: &'a P,
    bar: ProgressBar,
}

impl<'a, P> ProgressProvider<'a, P> {
    /// Track `len` fetches. The bar is hidden unless `visible`.
    pub(crate) fn new(inner: &'a P, len: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(len as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                bar.set_style(style.progress_chars("█▓░"));
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { inner, bar }
    }

    /// Clear the bar once all fetches are done.
    pub(crate) fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl<P: SnapshotProvider + Sync> SnapshotProvider for ProgressProvider<'_, P> {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<FinancialSnapshot> {
        self.bar.set_message(format!("Fetching {}", symbol));
        let result = self.inner.fetch_snapshot(symbol).await;
        self.bar.inc(1);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lynchpin_data::Metric;

    #[tokio::test]
    async fn test_progress_provider_delegates() {
        let inner = InMemoryProvider::from_snapshots([
            FinancialSnapshot::new("PEP").with(Metric::TrailingPe, 20.0),
        ]);
        let provider = ProgressProvider::new(&inner, 2, false);

        let snapshot = provider.fetch_snapshot("pep").await.unwrap();
        assert_eq!(snapshot.trailing_pe, Some(20.0));
        assert!(provider.fetch_snapshot("MISSING").await.is_err());
        assert_eq!(provider.bar.position(), 2);
        provider.finish();
    }

    #[tokio::test]
    async fn test_any_provider_offline() {
        let provider = AnyProvider::Offline(InMemoryProvider::from_snapshots([
            FinancialSnapshot::new("KO"),
        ]));
        assert!(provider.fetch_snapshot("KO").await.is_ok());
    }
}
