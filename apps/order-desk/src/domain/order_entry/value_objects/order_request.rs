//! Validated order request payload.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{OrderSide, OrderType};
use crate::domain::shared::Symbol;

/// An order the exchange can be asked to execute.
///
/// Only [`OrderRequestBuilder`](crate::domain::order_entry::OrderRequestBuilder)
/// constructs these, so `price` is present iff the type needs a limit price
/// and `stop_price` is present iff the type is STOP. Amounts are strictly
/// positive.
///
/// Serializes to the submission endpoint's body, with amounts as JSON
/// numbers and unused prices as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    symbol: Symbol,
    side: OrderSide,
    order_type: OrderType,
    #[serde(with = "rust_decimal::serde::float")]
    quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    stop_price: Option<Decimal>,
}

impl OrderRequest {
    pub(in crate::domain::order_entry) const fn new(
        symbol: Symbol,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
        stop_price: Option<Decimal>,
    ) -> Self {
        Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
            stop_price,
        }
    }

    /// Trading pair.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Buy or sell.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Execution style.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Requested quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Limit price, for LIMIT and STOP orders.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Stop trigger price, for STOP orders.
    #[must_use]
    pub const fn stop_price(&self) -> Option<Decimal> {
        self.stop_price
    }
}
