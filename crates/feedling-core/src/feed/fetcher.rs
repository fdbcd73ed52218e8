use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;

use crate::config::AppConfig;
use crate::{Error, Result};

/// Feed fetcher owning a single HTTP client
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a new fetcher with the configured request timeout
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.network.request_timeout_secs))
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(Error::Network)?;

        Ok(Self { client })
    }

    /// Fetch the feed document at `link`, returning the full response body.
    ///
    /// One blocking GET, no retry. A non-success status fails with
    /// `UnexpectedStatus`, and a failure while consuming the body fails
    /// with `Read` rather than handing back a truncated payload.
    pub async fn fetch(&self, link: &str) -> Result<Bytes> {
        tracing::debug!("Fetching feed from: {}", link);

        let response = self.client.get(link).send().await.map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("HTTP {} for URL: {}", status, link);
            return Err(Error::UnexpectedStatus(status));
        }

        response.bytes().await.map_err(Error::Read)
    }
}
