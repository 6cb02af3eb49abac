//! Quotes: client for the ZenQuotes API plus the embedded fallback list.
//!
//! DESIGN
//! ======
//! `QuoteApi` is the seam the controller depends on: one method per
//! endpoint, each returning a non-empty list or a [`QuoteError`].
//! `ZenQuotesClient` is the real implementation; tests inject mocks.
//! The trait is `?Send` because the browser fetch futures are not `Send`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, malformed bodies and empty lists
//! all surface as `QuoteError` values. No retries beyond the single
//! today → random fallback in [`daily_quote`].

pub mod config;
pub mod fallback;
pub mod zenquotes;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use tracing::warn;

use crate::types::Quote;

pub use config::QuoteApiConfig;
pub use fallback::{fallback_quote, is_fallback_quote};
pub use zenquotes::ZenQuotesClient;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by quote fetches. `Display` is user-readable.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// The request never produced a response (DNS, TLS, CORS, offline).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The response body was not a JSON list of quotes.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The response was a valid but empty list.
    #[error("No quote data received")]
    Empty,

    /// The configured base or proxy URL could not be turned into a request URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// API TRAIT
// =============================================================================

/// One method per quotes endpoint.
///
/// Implementations must return `Ok` only with a non-empty list.
#[async_trait::async_trait(?Send)]
pub trait QuoteApi {
    /// Fetch the quote of the day (`/today`).
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteError`] if the request fails or yields no quotes.
    async fn today(&self) -> Result<Vec<Quote>, QuoteError>;

    /// Fetch a single random quote (`/random`).
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteError`] if the request fails or yields no quotes.
    async fn random(&self) -> Result<Vec<Quote>, QuoteError>;

    /// Fetch `count` random quotes (`/random/{count}`).
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteError`] if the request fails or yields no quotes.
    async fn random_batch(&self, count: u32) -> Result<Vec<Quote>, QuoteError>;
}

/// Today's quote, falling back to a random quote when `/today` fails.
///
/// # Errors
///
/// Returns the random endpoint's error when both requests fail.
pub async fn daily_quote(api: &dyn QuoteApi) -> Result<Vec<Quote>, QuoteError> {
    match api.today().await {
        Ok(quotes) => Ok(quotes),
        Err(e) => {
            warn!(error = %e, "today's quote unavailable; trying random quote");
            api.random().await
        }
    }
}
