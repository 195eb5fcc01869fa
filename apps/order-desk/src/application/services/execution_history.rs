//! Execution History Store
//!
//! One record per attempt that reached a remote verdict, newest first.

use std::collections::{HashSet, VecDeque};

use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::broadcast;

use super::event_logger::DEFAULT_SUBSCRIBER_CAPACITY;
use crate::domain::execution::ExecutionOrder;
use crate::domain::shared::{IdSequence, RecordId, Timestamp};

/// Text shown for an empty history.
pub const EMPTY_HISTORY_MESSAGE: &str = "No orders yet";

/// History store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A record with this id is already stored.
    #[error("duplicate execution record id: {0}")]
    DuplicateId(RecordId),
}

/// What the history panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// Nothing recorded yet.
    Empty,
    /// Records, newest first.
    Orders(Vec<ExecutionOrder>),
}

#[derive(Debug, Default)]
struct Records {
    orders: VecDeque<ExecutionOrder>,
    ids: HashSet<RecordId>,
}

/// Append-only, most-recent-first execution history.
#[derive(Debug)]
pub struct ExecutionHistoryStore {
    records: RwLock<Records>,
    ids: IdSequence,
    tx: broadcast::Sender<ExecutionOrder>,
}

impl ExecutionHistoryStore {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::with_subscriber_capacity(DEFAULT_SUBSCRIBER_CAPACITY)
    }

    /// Create an empty history with the given subscriber channel capacity.
    #[must_use]
    pub fn with_subscriber_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(Records::default()),
            ids: IdSequence::new(""),
            tx: broadcast::channel(capacity.max(1)).0,
        }
    }

    /// Allocate an id for a record completed at `at`.
    pub fn next_id(&self, at: Timestamp) -> RecordId {
        self.ids.next_id(at)
    }

    /// Prepend a record. Refused if its id is already present.
    pub fn record(&self, order: ExecutionOrder) -> Result<(), HistoryError> {
        {
            let mut records = self.records.write();
            if !records.ids.insert(order.id.clone()) {
                return Err(HistoryError::DuplicateId(order.id));
            }
            records.orders.push_front(order.clone());
        }

        tracing::debug!(
            record_id = %order.id,
            order_id = %order.order_id,
            status = %order.status,
            "Execution recorded"
        );

        let _ = self.tx.send(order);
        Ok(())
    }

    /// All records, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ExecutionOrder> {
        self.records.read().orders.iter().cloned().collect()
    }

    /// Records in display form.
    #[must_use]
    pub fn view(&self) -> HistoryView {
        let orders = self.snapshot();
        if orders.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Orders(orders)
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().orders.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().orders.is_empty()
    }

    /// Receive every record appended from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ExecutionOrder> {
        self.tx.subscribe()
    }
}

impl Default for ExecutionHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::execution::UiStatus;
    use crate::domain::order_entry::{OrderSide, OrderType};
    use crate::domain::shared::{ExchangeOrderId, Symbol};
    use rust_decimal_macros::dec;

    fn order(store: &ExecutionHistoryStore, exchange_id: &str) -> ExecutionOrder {
        let at = Timestamp::now();
        ExecutionOrder {
            id: store.next_id(at),
            order_id: ExchangeOrderId::new(exchange_id),
            symbol: Symbol::new("BTCUSDT"),
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            quantity: dec!(0.5),
            price: None,
            status: UiStatus::Pending,
            timestamp: at,
        }
    }

    #[test]
    fn empty_view() {
        let store = ExecutionHistoryStore::new();
        assert_eq!(store.view(), HistoryView::Empty);
        assert!(store.is_empty());
    }

    #[test]
    fn newest_record_first() {
        let store = ExecutionHistoryStore::new();
        store.record(order(&store, "1")).unwrap();
        store.record(order(&store, "2")).unwrap();

        let HistoryView::Orders(orders) = store.view() else {
            panic!("expected orders");
        };
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id.as_str(), "2");
        assert_eq!(orders[1].order_id.as_str(), "1");
    }

    #[test]
    fn duplicate_id_is_refused() {
        let store = ExecutionHistoryStore::new();
        let first = order(&store, "1");
        let mut again = order(&store, "2");
        again.id = first.id.clone();

        store.record(first.clone()).unwrap();
        let err = store.record(again).unwrap_err();

        assert_eq!(err, HistoryError::DuplicateId(first.id));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn subscribers_see_new_records() {
        let store = ExecutionHistoryStore::new();
        let mut rx = store.subscribe();

        let record = order(&store, "42");
        store.record(record.clone()).unwrap();

        assert_eq!(rx.recv().await.unwrap(), record);
    }
}
