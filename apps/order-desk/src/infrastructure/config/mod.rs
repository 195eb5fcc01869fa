//! Desk Configuration
//!
//! Settings loaded from environment variables (after `.env`).

mod settings;

pub use settings::{ConfigError, DeskConfig, env_keys};
