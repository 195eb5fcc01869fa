//! Order Gateway Adapters
//!
//! Implementations of `OrderGatewayPort`.

pub mod http;
pub mod mock;

pub use http::{GatewayConfig, HttpGatewayError, HttpOrderGateway};
pub use mock::ScriptedGateway;
