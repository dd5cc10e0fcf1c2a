//! HTTP client for the breed reference API
//!
//! Treated as an opaque source of [`BreedRecord`]s. Any fetch-stage failure
//! (network error, non-2xx status, malformed JSON) surfaces before the
//! loader runs; there is no retry.

use crate::config::Config;
use crate::model::BreedRecord;
use crate::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Client for the breed reference API
pub struct BreedApiClient {
    client: Client,
    base_url: String,
}

impl BreedApiClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client from pipeline configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.api_timeout_secs)
    }

    /// Fetch the full collection of breed records
    pub async fn fetch_breeds(&self) -> Result<Vec<BreedRecord>> {
        let url = format!("{}/breeds", self.base_url.trim_end_matches('/'));
        info!(url = %url, "fetching breed records");

        let records: Vec<BreedRecord> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(count = records.len(), "fetched breed records");
        Ok(records)
    }
}
