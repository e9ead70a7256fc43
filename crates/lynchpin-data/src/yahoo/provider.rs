//! Snapshot provider backed by Yahoo Finance.

use super::summary::{QuoteSummaryResponse, SUMMARY_MODULES};
use crate::error::{DataError, Result};
use crate::provider::SnapshotProvider;
use crate::snapshot::FinancialSnapshot;
use std::time::Duration;
use tokio::sync::Mutex;
use yahoo_finance_api as yahoo;

/// Sets the session cookie required by the crumb endpoint.
const COOKIE_URL: &str = "https://fc.yahoo.com";

/// Issues the crumb token that authorizes `quoteSummary` requests.
const CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";

const SUMMARY_BASE_URL: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";

/// Browser-like user agent; Yahoo rejects the default reqwest one.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Yahoo Finance snapshot provider.
///
/// Fundamentals come from the `quoteSummary` endpoint. When it carries no
/// current price, the latest daily close from the chart API is used instead.
pub struct YahooProvider {
    client: reqwest::Client,
    connector: yahoo::YahooConnector,
    crumb: Mutex<Option<String>>,
    base_url: String,
}

impl std::fmt::Debug for YahooProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl YahooProvider {
    /// Create a provider with a fresh cookie store.
    ///
    /// # Example
    /// ```no_run
    /// use lynchpin_data::{SnapshotProvider, yahoo::YahooProvider};
    ///
    /// # async fn example() -> lynchpin_data::Result<()> {
    /// let provider = YahooProvider::new()?;
    /// let snapshot = provider.fetch_snapshot("KO").await?;
    /// println!("{:?}", snapshot.trailing_pe);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            connector: yahoo::YahooConnector::new()?,
            crumb: Mutex::new(None),
            base_url: SUMMARY_BASE_URL.to_string(),
        })
    }

    /// Return the session crumb, requesting one on first use.
    async fn crumb(&self) -> Result<String> {
        let mut guard = self.crumb.lock().await;
        if let Some(crumb) = guard.as_ref() {
            return Ok(crumb.clone());
        }

        // Only the cookie matters here; fc.yahoo.com answers with a 404.
        self.client.get(COOKIE_URL).send().await?;

        let response = self.client.get(CRUMB_URL).send().await?;
        if !response.status().is_success() {
            return Err(DataError::Http {
                status: response.status().as_u16(),
                url: CRUMB_URL.to_string(),
            });
        }

        let crumb = response.text().await?.trim().to_string();
        if crumb.is_empty() {
            return Err(DataError::YahooApi("Empty crumb".to_string()));
        }

        tracing::debug!("Obtained Yahoo crumb");
        *guard = Some(crumb.clone());
        Ok(crumb)
    }

    /// Fetch and parse the `quoteSummary` modules for `symbol`.
    pub async fn fetch_summary(&self, symbol: &str) -> Result<QuoteSummaryResponse> {
        let crumb = self.crumb().await?;
        let url = format!("{}/{}", self.base_url, symbol);

        tracing::debug!(symbol, "Requesting quoteSummary");
        let response = self
            .client
            .get(&url)
            .query(&[("modules", SUMMARY_MODULES), ("crumb", crumb.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Unknown symbols come back as 404 with a JSON error body.
        match serde_json::from_str::<QuoteSummaryResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(DataError::Http {
                status: status.as_u16(),
                url,
            }),
            Err(e) => Err(DataError::Parse(format!(
                "Failed to parse quoteSummary for {}: {}",
                symbol, e
            ))),
        }
    }

    /// Latest daily close from the chart API.
    pub async fn fetch_latest_close(&self, symbol: &str) -> Result<f64> {
        let response = self.connector.get_latest_quotes(symbol, "1d").await?;
        let quote = response.last_quote()?;
        Ok(quote.close)
    }
}

impl SnapshotProvider for YahooProvider {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<FinancialSnapshot> {
        if symbol.trim().is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }
        let symbol = symbol.trim().to_uppercase();

        let mut snapshot = self.fetch_summary(&symbol).await?.into_snapshot(&symbol)?;

        if snapshot.current_price.is_none() {
            match self.fetch_latest_close(&symbol).await {
                Ok(close) => snapshot.current_price = Some(close),
                Err(e) => tracing::warn!(symbol = %symbol, error = %e, "No price available"),
            }
        }

        tracing::debug!(
            symbol = %symbol,
            reported = snapshot.reported_count(),
            "Fetched snapshot"
        );
        Ok(snapshot)
    }
}
