//! HTTP Order Gateway
//!
//! `OrderGatewayPort` over the order service's REST API:
//! - `POST /order` submission, one call per attempt, never retried
//! - Tolerant response parsing (string or numeric scalars)
//! - Balance, health and server-log reads

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::HttpOrderGateway;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GatewayConfig};
pub use error::HttpGatewayError;
