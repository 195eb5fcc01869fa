//! Execution history record.

use rust_decimal::Decimal;
use serde::Serialize;

use super::UiStatus;
use crate::domain::order_entry::{OrderRequest, OrderSide, OrderType};
use crate::domain::shared::{ExchangeOrderId, RecordId, Symbol, Timestamp};

/// One attempt that reached a remote verdict, as shown in the history.
///
/// Records are created once and never edited; the history hands out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOrder {
    /// Unique per attempt.
    pub id: RecordId,
    /// Exchange-assigned id, or `"unknown"`.
    pub order_id: ExchangeOrderId,
    /// Trading pair.
    pub symbol: Symbol,
    /// Side.
    pub side: OrderSide,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Executed quantity if known, else original, else requested.
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Average fill price.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    /// Mapped status.
    pub status: UiStatus,
    /// When the attempt completed.
    pub timestamp: Timestamp,
}

impl ExecutionOrder {
    /// A `Failed` record for an order the exchange refused.
    ///
    /// Everything except the status comes from what was requested.
    #[must_use]
    pub fn rejected(id: RecordId, request: &OrderRequest, timestamp: Timestamp) -> Self {
        Self {
            id,
            order_id: ExchangeOrderId::unknown(),
            symbol: request.symbol().clone(),
            side: request.side(),
            order_type: request.order_type(),
            quantity: request.quantity(),
            price: request.price(),
            status: UiStatus::Failed,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_entry::{OrderForm, OrderRequestBuilder};
    use rust_decimal_macros::dec;

    #[test]
    fn rejected_record_echoes_request() {
        let request = OrderRequestBuilder::new()
            .build(
                &OrderForm::new("ETHUSDT", OrderSide::Sell, OrderType::Limit)
                    .with_quantity("2")
                    .with_price("3100"),
            )
            .unwrap();
        let at = Timestamp::parse("2026-01-19T12:00:00Z").unwrap();

        let record = ExecutionOrder::rejected(RecordId::new("r1"), &request, at);

        assert!(record.order_id.is_unknown());
        assert_eq!(record.symbol.as_str(), "ETHUSDT");
        assert_eq!(record.side, OrderSide::Sell);
        assert_eq!(record.order_type, OrderType::Limit);
        assert_eq!(record.quantity, dec!(2));
        assert_eq!(record.price, Some(dec!(3100)));
        assert_eq!(record.status, UiStatus::Failed);
        assert_eq!(record.timestamp, at);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = ExecutionOrder {
            id: RecordId::new("r1"),
            order_id: ExchangeOrderId::new("4023918"),
            symbol: Symbol::new("BTCUSDT"),
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            quantity: dec!(0.5),
            price: Some(dec!(65000)),
            status: UiStatus::Filled,
            timestamp: Timestamp::parse("2026-01-19T12:00:00Z").unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["orderId"], "4023918");
        assert_eq!(json["type"], "MARKET");
        assert_eq!(json["quantity"], 0.5);
        assert_eq!(json["status"], "Filled");
    }
}
