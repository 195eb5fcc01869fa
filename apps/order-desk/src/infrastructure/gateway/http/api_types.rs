//! Order service request and response types.
//!
//! Scalars in responses may arrive as strings or numbers depending on the
//! exchange behind the service, so they are read through [`WireScalar`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::application::ports::{AcceptedOrder, AssetBalance, Rejection};
use crate::domain::order_entry::{OrderSide, OrderType};
use crate::domain::shared::{ExchangeOrderId, Symbol};

// ============================================================================
// Scalars
// ============================================================================

/// A response scalar that may be text, a number, or something unexpected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireScalar {
    /// JSON string.
    Text(String),
    /// JSON number.
    Number(Number),
    /// Anything else; treated as absent.
    Other(Value),
}

impl WireScalar {
    /// Trimmed text form; empty strings count as absent.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Self::Number(n) => Some(n.to_string()),
            Self::Other(_) => None,
        }
    }

    /// Decimal form, accepting plain and scientific notation.
    #[must_use]
    pub fn decimal(&self) -> Option<Decimal> {
        let text = self.text()?;
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }
}

fn text(field: Option<&WireScalar>) -> Option<String> {
    field.and_then(WireScalar::text)
}

fn decimal(field: Option<&WireScalar>) -> Option<Decimal> {
    field.and_then(WireScalar::decimal)
}

// ============================================================================
// Order Response Types
// ============================================================================

/// Body of a successful `POST /order`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderSubmissionResponse {
    /// Success flag set by the service.
    #[serde(default)]
    pub success: Option<bool>,
    /// Order as reported by the exchange.
    #[serde(default)]
    pub order: Option<WireOrder>,
}

/// Order fields as reported by the exchange.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOrder {
    /// Exchange order id.
    #[serde(default)]
    pub order_id: Option<WireScalar>,
    /// Trading pair.
    #[serde(default)]
    pub symbol: Option<WireScalar>,
    /// Exchange status, e.g. `NEW`.
    #[serde(default)]
    pub status: Option<WireScalar>,
    /// Side.
    #[serde(default)]
    pub side: Option<WireScalar>,
    /// Order type.
    #[serde(default, rename = "type")]
    pub order_type: Option<WireScalar>,
    /// Original quantity.
    #[serde(default)]
    pub orig_qty: Option<WireScalar>,
    /// Executed quantity.
    #[serde(default)]
    pub executed_qty: Option<WireScalar>,
    /// Average fill price.
    #[serde(default)]
    pub avg_price: Option<WireScalar>,
}

impl WireOrder {
    /// Convert to the port's `AcceptedOrder`.
    ///
    /// Unparseable fields become `None`; an average price of zero means
    /// nothing has filled and also becomes `None`.
    #[must_use]
    pub fn into_accepted(self, http_status: u16, body: Value) -> AcceptedOrder {
        AcceptedOrder {
            http_status,
            order_id: text(self.order_id.as_ref()).map(ExchangeOrderId::new),
            symbol: text(self.symbol.as_ref()).map(Symbol::new),
            side: text(self.side.as_ref()).and_then(|s| s.parse::<OrderSide>().ok()),
            order_type: text(self.order_type.as_ref()).and_then(|s| s.parse::<OrderType>().ok()),
            executed_qty: decimal(self.executed_qty.as_ref()),
            orig_qty: decimal(self.orig_qty.as_ref()),
            avg_price: decimal(self.avg_price.as_ref()).filter(|p| *p > Decimal::ZERO),
            status: text(self.status.as_ref()),
            body,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body; FastAPI-style services put the reason under `detail`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    /// A string, or a list of `{msg, ...}` validation entries.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Human-readable reason, if one can be extracted.
    #[must_use]
    pub fn detail_text(&self) -> Option<String> {
        let text = match self.detail.as_ref()? {
            Value::String(s) => s.trim().to_string(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; "),
            Value::Object(fields) => fields
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        };
        (!text.is_empty()).then_some(text)
    }

    /// Build a `Rejection` from a parsed error body.
    #[must_use]
    pub fn into_rejection(self, http_status: u16, body: Value) -> Rejection {
        Rejection {
            http_status,
            detail: self.detail_text(),
            body,
        }
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Body of `GET /balance`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BalanceResponse {
    /// One entry per asset.
    #[serde(default)]
    pub balances: Vec<WireBalance>,
}

/// One asset balance.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBalance {
    /// Asset code.
    pub asset: String,
    /// Wallet balance.
    #[serde(default)]
    pub balance: Option<WireScalar>,
    /// Free balance.
    #[serde(default)]
    pub available_balance: Option<WireScalar>,
}

impl From<WireBalance> for AssetBalance {
    fn from(wire: WireBalance) -> Self {
        Self {
            asset: wire.asset,
            balance: decimal(wire.balance.as_ref()).unwrap_or_default(),
            available_balance: decimal(wire.available_balance.as_ref()).unwrap_or_default(),
        }
    }
}

/// Body of `GET /logs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsResponse {
    /// Log lines, oldest first.
    #[serde(default)]
    pub logs: Vec<String>,
}
