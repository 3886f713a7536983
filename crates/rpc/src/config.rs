//! Endpoint configuration, resolved once at start-up.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:12315";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while building the endpoint configuration or HTTP client.
///
/// These are the only errors in the transport crate that reach a caller, and
/// only at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid Logseq API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Logseq API URL '{url}' must use http or https")]
    UnsupportedScheme { url: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),
}

/// Bearer token for the Logseq HTTP API server.
///
/// `Debug` is redacted so the token never reaches the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Returns `None` for an empty token, which means "unauthenticated".
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() { None } else { Some(Self(v)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request: Duration,
    pub connect: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Immutable connection settings for one [`HttpInvoker`](crate::HttpInvoker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: Url,
    api_url: Url,
    token: Option<ApiToken>,
    timeouts: Timeouts,
}

impl EndpointConfig {
    /// Validates `base_url` and derives the `<base_url>/api` call endpoint.
    ///
    /// A trailing slash on `base_url` is ignored. An empty `token` is treated
    /// as absent.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base = parse_url(trimmed)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: base_url.to_string(),
            });
        }
        let api_url = parse_url(&format!("{trimmed}/api"))?;
        Ok(Self {
            base_url: base,
            api_url,
            token: token.and_then(ApiToken::new),
            timeouts: Timeouts::default(),
        })
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The single endpoint every call is posted to.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn token(&self) -> Option<&ApiToken> {
        self.token.as_ref()
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
