//! HTTP gateway configuration.

use std::time::Duration;

use reqwest::Url;

use super::error::HttpGatewayError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the HTTP order gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Service root, without a trailing `/`.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Create a configuration for `base_url`.
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the base URL is an absolute `http` or `https` URL.
    pub fn validate(&self) -> Result<(), HttpGatewayError> {
        let invalid = |reason: String| HttpGatewayError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Full URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
