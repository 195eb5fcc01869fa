//! Raw order form fields as typed by the operator.

use serde::{Deserialize, Serialize};

use super::{OrderSide, OrderType};

/// Symbol pre-filled on a fresh form.
pub const DEFAULT_SYMBOL: &str = "BTCUSDT";

/// Unvalidated order entry fields.
///
/// Numeric fields are kept as text so that a half-typed value can be shown
/// back unchanged; the request builder decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    /// Trading pair as entered.
    pub symbol: String,
    /// Selected side.
    pub side: OrderSide,
    /// Selected order type.
    pub order_type: OrderType,
    /// Quantity text.
    pub quantity: String,
    /// Limit price text (used by LIMIT and STOP).
    pub price: String,
    /// Stop trigger price text (used by STOP).
    pub stop_price: String,
}

impl OrderForm {
    /// A form with the given selections and empty numeric fields.
    #[must_use]
    pub fn new(symbol: impl Into<String>, side: OrderSide, order_type: OrderType) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            quantity: String::new(),
            price: String::new(),
            stop_price: String::new(),
        }
    }

    /// Set the quantity text.
    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    /// Set the limit price text.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Set the stop price text.
    #[must_use]
    pub fn with_stop_price(mut self, stop_price: impl Into<String>) -> Self {
        self.stop_price = stop_price.into();
        self
    }

    /// Clear the amount fields after a successful submission.
    ///
    /// Symbol, side and order type are kept for the next order.
    pub fn clear_amounts(&mut self) {
        self.quantity.clear();
        self.price.clear();
        self.stop_price.clear();
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, OrderSide::Buy, OrderType::Market)
    }
}
