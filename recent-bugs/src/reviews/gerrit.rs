//! Gerrit REST client.

use super::{ReviewError, ReviewSource, ReviewStatus};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Prefix Gerrit puts in front of every JSON body to defeat XSSI.
pub const MAGIC_PREFIX: &str = ")]}'";

/// The parts of a change the report uses.
#[derive(Debug, Deserialize)]
struct ChangeInfo {
    status: String,
}

/// Anonymous client for a Gerrit instance's change endpoint.
#[derive(Debug, Clone)]
pub struct GerritClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GerritClient {
    /// Creates a client for the Gerrit instance at `https://<host>/`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError`] if `host` does not form a URL or the HTTP
    /// client cannot be built.
    pub fn new(host: &str, timeout: Option<Duration>) -> Result<Self, ReviewError> {
        Self::with_base_url(&format!("https://{host}/"), timeout)
    }

    /// Creates a client for the Gerrit instance served at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError`] if `base_url` is not a URL or the HTTP client
    /// cannot be built.
    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self, ReviewError> {
        let base_url = Url::parse(base_url).map_err(|source| ReviewError::InvalidHost {
            host: base_url.to_string(),
            source,
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ReviewError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Returns the status endpoint of `review`.
    #[must_use]
    pub fn change_url(&self, review: u64) -> String {
        format!("{}changes/{review}", self.base_url)
    }
}

#[async_trait]
impl ReviewSource for GerritClient {
    async fn review_status(&self, review: u64) -> Result<ReviewStatus, ReviewError> {
        let url = self.change_url(review);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ReviewError::Http { review, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Status { review, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ReviewError::Http { review, source })?;
        parse_change_status(review, &body)
    }
}

/// Strips the magic prefix from a change body and returns its `status`.
///
/// # Errors
///
/// Returns [`ReviewError::MissingPrefix`] if `body` does not start with
/// [`MAGIC_PREFIX`], or [`ReviewError::Decode`] if the rest is not a change.
pub fn parse_change_status(review: u64, body: &str) -> Result<ReviewStatus, ReviewError> {
    let json = body
        .strip_prefix(MAGIC_PREFIX)
        .ok_or(ReviewError::MissingPrefix { review })?;
    let change: ChangeInfo =
        serde_json::from_str(json).map_err(|source| ReviewError::Decode { review, source })?;
    Ok(ReviewStatus::new(change.status))
}
