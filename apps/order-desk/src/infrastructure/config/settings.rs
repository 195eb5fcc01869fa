//! Desk Configuration Settings
//!
//! # Environment Variables
//!
//! - `ORDER_DESK_API_URL`: order service root (default: http://localhost:8000)
//! - `ORDER_DESK_HTTP_TIMEOUT_SECS`: request timeout (default: 30)
//! - `ORDER_DESK_METRICS_PORT`: Prometheus listener port, 0 disables (default: 0)
//! - `ORDER_DESK_LOG_FILE`: also write logs to this file (default: unset)

use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::gateway::{GatewayConfig, HttpGatewayError};
use crate::infrastructure::gateway::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Environment variable names.
pub mod env_keys {
    /// Order service root.
    pub const API_URL: &str = "ORDER_DESK_API_URL";
    /// Request timeout in seconds.
    pub const HTTP_TIMEOUT_SECS: &str = "ORDER_DESK_HTTP_TIMEOUT_SECS";
    /// Prometheus listener port.
    pub const METRICS_PORT: &str = "ORDER_DESK_METRICS_PORT";
    /// Optional log file.
    pub const LOG_FILE: &str = "ORDER_DESK_LOG_FILE";
}

/// Complete desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskConfig {
    /// Order service connection.
    pub gateway: GatewayConfig,
    /// Prometheus listener port; `None` leaves metrics unexported.
    pub metrics_port: Option<u16>,
    /// Extra log destination.
    pub log_file: Option<PathBuf>,
}

impl DeskConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(env_keys::API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = lookup(env_keys::HTTP_TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        let gateway = GatewayConfig::new(base_url).with_timeout(timeout);
        gateway.validate()?;

        let metrics_port = lookup(env_keys::METRICS_PORT)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|port| *port != 0);

        let log_file = lookup(env_keys::LOG_FILE)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            gateway,
            metrics_port,
            log_file,
        })
    }

    /// Point the gateway at a different service root.
    pub fn with_api_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let gateway = GatewayConfig::new(base_url).with_timeout(self.gateway.timeout);
        gateway.validate()?;
        self.gateway = gateway;
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The order service URL is unusable.
    #[error("{key}: {0}", key = env_keys::API_URL)]
    InvalidApiUrl(#[from] HttpGatewayError),
}
