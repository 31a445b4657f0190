//! HTTP client for the metrics backend.
//!
//! Wraps reqwest with the two endpoint calls the dashboard makes. Each call
//! returns a discriminated result: the payload on a success status, a typed
//! [`FetchError`] on anything else. The caller branches on that result once
//! per tick; there is no retry here.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use super::payload::{NetworkResponse, StatsResponse};

/// Errors that can occur when fetching from the backend.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request rejected or failed in transit.
    #[error("request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// Client for the stats and network-info endpoints.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> StatsClientBuilder {
        StatsClientBuilder::default()
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the metric readings, averaged over `averaging_window`.
    pub async fn fetch_stats(
        &self,
        averaging_window: Duration,
    ) -> Result<StatsResponse, FetchError> {
        let url = format!("{}/getstats/", self.base_url);
        let dt_ms = averaging_window.as_millis().to_string();

        let response = self
            .client
            .post(&url)
            .form(&[("dt", dt_ms.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let stats: StatsResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(stats)
    }

    /// Fetch the network reachability info (hostname, address, ...).
    pub async fn fetch_network(&self) -> Result<NetworkResponse, FetchError> {
        let url = format!("{}/getnetwork/", self.base_url);

        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let network: NetworkResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(network)
    }
}

/// Builder for [`StatsClient`].
#[derive(Debug, Default)]
pub struct StatsClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl StatsClientBuilder {
    /// Set the backend base URL (e.g. "http://raspberrypi:5000").
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<StatsClient, FetchError> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| "http://localhost:5000".to_string());
        // Trailing slash would double up in endpoint paths
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(StatsClient { client, base_url })
    }
}
