// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Order Desk - Order Entry Client Library
//!
//! Submits market, limit and stop-limit orders to a remote order-execution
//! service and keeps the execution history and the event log consistent
//! with every attempt.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: pure order-entry and execution types
//!   - `order_entry`: form, request builder, validation
//!   - `execution`: status mapping, history records, event-log records
//!
//! - **Application**: use cases and orchestration
//!   - `ports`: `OrderGatewayPort`
//!   - `services`: `EventLogger`, `ExecutionHistoryStore`
//!   - `use_cases`: `DashboardCoordinator`
//!   - `dto`: operator notifications
//!
//! - **Infrastructure**: adapters
//!   - `gateway`: HTTP order service adapter and a scripted test gateway
//!   - `config`: environment settings
//!   - `telemetry`: tracing setup
//!
//! - **Presentation**: plain-text views for the CLI

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core order-entry logic with no I/O.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Prometheus metrics.
pub mod observability;

/// Terminal rendering.
pub mod presentation;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::execution::{ExecutionOrder, LogKind, OrderLog, UiStatus, map_status};
pub use domain::order_entry::{
    OrderForm, OrderRequest, OrderRequestBuilder, OrderSide, OrderType, ValidationError,
};
pub use domain::shared::{ExchangeOrderId, RecordId, Symbol, Timestamp};

// Application re-exports
pub use application::dto::Notification;
pub use application::ports::{GatewayError, OrderGatewayPort, SubmissionOutcome};
pub use application::services::{EventLogger, ExecutionHistoryStore, HistoryView};
pub use application::use_cases::{
    AttemptOutcome, AttemptReport, DashboardCoordinator, SubmissionPhase, SubmitError,
};

// Infrastructure re-exports
pub use infrastructure::config::{ConfigError, DeskConfig};
pub use infrastructure::gateway::{GatewayConfig, HttpOrderGateway, ScriptedGateway};
