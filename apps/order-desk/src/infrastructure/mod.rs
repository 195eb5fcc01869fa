//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `gateway/`: order service adapters (HTTP, scripted)
//! - `config/`: environment-driven settings
//! - `telemetry/`: tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod telemetry;
