//! Order Gateway Port (Driven Port)
//!
//! Interface to the remote order-execution service.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::order_entry::{OrderRequest, OrderSide, OrderType};
use crate::domain::shared::{ExchangeOrderId, Symbol};

/// Path of the order submission endpoint.
pub const ORDER_PATH: &str = "/order";

/// Path of the account balance endpoint.
pub const BALANCE_PATH: &str = "/balance";

/// Path of the health-check endpoint.
pub const HEALTH_PATH: &str = "/";

/// Path of the service's own log tail.
pub const LOGS_PATH: &str = "/logs";

/// Order payload from a successful submission.
///
/// Every field is optional because exchanges differ in what they echo back.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedOrder {
    /// HTTP status code of the response.
    pub http_status: u16,
    /// Exchange-assigned order id.
    pub order_id: Option<ExchangeOrderId>,
    /// Confirmed trading pair.
    pub symbol: Option<Symbol>,
    /// Confirmed side.
    pub side: Option<OrderSide>,
    /// Confirmed order type.
    pub order_type: Option<OrderType>,
    /// Quantity executed so far.
    pub executed_qty: Option<Decimal>,
    /// Quantity originally ordered.
    pub orig_qty: Option<Decimal>,
    /// Average fill price; `None` when nothing has filled.
    pub avg_price: Option<Decimal>,
    /// Exchange-native status, e.g. `FILLED`.
    pub status: Option<String>,
    /// Response body as received.
    pub body: Value,
}

impl AcceptedOrder {
    /// Executed quantity if reported, else the original quantity.
    #[must_use]
    pub fn reported_quantity(&self) -> Option<Decimal> {
        self.executed_qty.or(self.orig_qty)
    }
}

/// A non-success response from the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// HTTP status code of the response.
    pub http_status: u16,
    /// Human-readable reason, when the service gave one.
    pub detail: Option<String>,
    /// Response body as received.
    pub body: Value,
}

/// A call that never produced a usable response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    /// What went wrong.
    pub message: String,
}

impl TransportFailure {
    /// Create a transport failure.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of one order submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The service accepted the order.
    Accepted(AcceptedOrder),
    /// The service answered with a failure status.
    Rejected(Rejection),
    /// No usable answer.
    TransportFailed(TransportFailure),
}

impl SubmissionOutcome {
    /// Short label for logs and metrics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Accepted(_) => "accepted",
            Self::Rejected(_) => "rejected",
            Self::TransportFailed(_) => "transport_failed",
        }
    }
}

/// One asset held on the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    /// Asset code, e.g. `USDT`.
    pub asset: String,
    /// Wallet balance.
    pub balance: Decimal,
    /// Balance free for new orders.
    pub available_balance: Decimal,
}

impl AssetBalance {
    /// True when both the wallet and available balances are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.balance.is_zero() && self.available_balance.is_zero()
    }
}

/// Health-check answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Greeting or description.
    pub message: String,
    /// Service state, e.g. `running`.
    pub status: String,
}

/// Gateway error for the read-only endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The call could not complete.
    #[error("request failed: {message}")]
    Transport {
        /// Error details.
        message: String,
    },

    /// The service answered with a failure status.
    #[error("service returned {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Reason given by the service.
        detail: Option<String>,
    },

    /// The body did not match the expected schema.
    #[error("unexpected response: {message}")]
    Decode {
        /// Error details.
        message: String,
    },
}

/// Port for the order-execution service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderGatewayPort: Send + Sync {
    /// Submit an order; exactly one outbound call.
    async fn submit_order(&self, request: &OrderRequest) -> SubmissionOutcome;

    /// Fetch account balances.
    async fn fetch_balances(&self) -> Result<Vec<AssetBalance>, GatewayError>;

    /// Check that the service is up.
    async fn health(&self) -> Result<HealthStatus, GatewayError>;

    /// Last `lines` lines of the service's own log.
    async fn server_logs(&self, lines: u32) -> Result<Vec<String>, GatewayError>;
}
