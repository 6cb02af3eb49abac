//! ZenQuotes API client.
//!
//! Thin `reqwest` wrapper over the `/today`, `/random` and `/random/{count}`
//! endpoints. Status and body handling live in `parse_quotes` so they can be
//! tested without a network. No timeout is set; the transport default applies.

use tracing::{debug, warn};

use super::config::QuoteApiConfig;
use super::{QuoteApi, QuoteError};
use crate::types::Quote;

pub struct ZenQuotesClient {
    http: reqwest::Client,
    config: QuoteApiConfig,
}

impl ZenQuotesClient {
    /// # Errors
    ///
    /// Returns [`QuoteError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: QuoteApiConfig) -> Result<Self, QuoteError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| QuoteError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &QuoteApiConfig {
        &self.config
    }

    /// `random_batch` with the configured batch size.
    ///
    /// # Errors
    ///
    /// Same as [`QuoteApi::random_batch`].
    pub async fn random_default_batch(&self) -> Result<Vec<Quote>, QuoteError> {
        self.random_batch(self.config.batch_size).await
    }

    async fn get_quotes(&self, path: &str) -> Result<Vec<Quote>, QuoteError> {
        let result = self.fetch(path).await;
        match &result {
            Ok(quotes) => debug!(endpoint = path, count = quotes.len(), "quotes fetched"),
            Err(e) => warn!(endpoint = path, error = %e, "quote fetch failed"),
        }
        result
    }

    async fn fetch(&self, path: &str) -> Result<Vec<Quote>, QuoteError> {
        let url = self.config.endpoint_url(path)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        parse_quotes(status, &text)
    }
}

#[async_trait::async_trait(?Send)]
impl QuoteApi for ZenQuotesClient {
    async fn today(&self) -> Result<Vec<Quote>, QuoteError> {
        self.get_quotes("today").await
    }

    async fn random(&self) -> Result<Vec<Quote>, QuoteError> {
        self.get_quotes("random").await
    }

    async fn random_batch(&self, count: u32) -> Result<Vec<Quote>, QuoteError> {
        self.get_quotes(&batch_path(count)).await
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn batch_path(count: u32) -> String {
    format!("random/{}", count.max(1))
}

/// Turn an HTTP status and body into quotes.
///
/// Non-2xx, non-list JSON and an empty list are all errors.
pub(crate) fn parse_quotes(status: u16, body: &str) -> Result<Vec<Quote>, QuoteError> {
    if !(200..300).contains(&status) {
        return Err(QuoteError::Status { status });
    }

    let quotes: Vec<Quote> = serde_json::from_str(body).map_err(|e| QuoteError::Parse(e.to_string()))?;
    if quotes.is_empty() {
        return Err(QuoteError::Empty);
    }
    Ok(quotes)
}

#[cfg(test)]
#[path = "zenquotes_test.rs"]
mod tests;
