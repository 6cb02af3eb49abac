//! Quote API configuration parsed from environment variables.
//!
//! In the browser there is no process environment, so [`QuoteApiConfig::from_env`]
//! simply yields the defaults there.

use reqwest::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://zenquotes.io/api";
pub const DEFAULT_CORS_PROXY: &str = "https://api.allorigins.win/raw";
pub const DEFAULT_BATCH_SIZE: u32 = 5;
pub const MAX_BATCH_SIZE: u32 = 50;

/// Query parameter the proxy reads the target URL from.
const PROXY_TARGET_PARAM: &str = "url";

/// Errors from parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteApiConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    /// CORS proxy endpoint; `None` sends requests to the API directly.
    pub cors_proxy: Option<String>,
    /// Default count for batch requests.
    pub batch_size: u32,
}

impl Default for QuoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            cors_proxy: Some(DEFAULT_CORS_PROXY.to_owned()),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl QuoteApiConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `QUOTES_API_BASE_URL`: default `https://zenquotes.io/api`
    /// - `QUOTES_CORS_PROXY`: default `https://api.allorigins.win/raw`; `none` or empty disables the proxy
    /// - `QUOTES_BATCH_SIZE`: 1..=50, default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `QUOTES_BATCH_SIZE` is not a valid count.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `QUOTES_BATCH_SIZE` is not a valid count.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("QUOTES_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let cors_proxy = parse_proxy(lookup("QUOTES_CORS_PROXY").as_deref());
        let batch_size = parse_batch_size(lookup("QUOTES_BATCH_SIZE").as_deref())?;

        Ok(Self { base_url, cors_proxy, batch_size })
    }

    /// Full request URL for an endpoint path such as `today` or `random/5`.
    ///
    /// With a proxy configured the API URL is percent-encoded into the
    /// proxy's `url` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`super::QuoteError::InvalidUrl`] if either URL does not parse.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, super::QuoteError> {
        let target = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let url = match &self.cors_proxy {
            Some(proxy) => Url::parse_with_params(proxy, &[(PROXY_TARGET_PARAM, target.as_str())]),
            None => Url::parse(&target),
        };
        url.map_err(|e| super::QuoteError::InvalidUrl(e.to_string()))
    }
}

fn parse_proxy(raw: Option<&str>) -> Option<String> {
    match raw.map(str::trim) {
        None => Some(DEFAULT_CORS_PROXY.to_owned()),
        Some("" | "none" | "off") => None,
        Some(proxy) => Some(proxy.to_owned()),
    }
}

fn parse_batch_size(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_BATCH_SIZE);
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if (1..=MAX_BATCH_SIZE).contains(&n) => Ok(n),
        _ => Err(ConfigError::InvalidValue { var: "QUOTES_BATCH_SIZE", value: raw.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
