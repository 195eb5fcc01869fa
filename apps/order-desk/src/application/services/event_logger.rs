//! Event Logger
//!
//! Session event log: one entry per outgoing request and per response or
//! error, newest first. Entries are never edited or removed.

use std::collections::VecDeque;

use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::domain::execution::{LogKind, OrderLog};
use crate::domain::shared::{IdSequence, Timestamp};

/// Default capacity of the subscriber channel.
pub const DEFAULT_SUBSCRIBER_CAPACITY: usize = 256;

/// Append-only, most-recent-first event log.
#[derive(Debug)]
pub struct EventLogger {
    entries: RwLock<VecDeque<OrderLog>>,
    ids: IdSequence,
    tx: broadcast::Sender<OrderLog>,
}

impl EventLogger {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::with_subscriber_capacity(DEFAULT_SUBSCRIBER_CAPACITY)
    }

    /// Create an empty log whose subscribers may lag by up to `capacity`
    /// entries before missing some.
    #[must_use]
    pub fn with_subscriber_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            ids: IdSequence::new("log-"),
            tx: broadcast::channel(capacity.max(1)).0,
        }
    }

    /// Prepend an entry stamped with a fresh id and the current time.
    pub fn record(&self, kind: LogKind, payload: Value) -> OrderLog {
        let timestamp = Timestamp::now();
        let entry = OrderLog {
            id: self.ids.next_id(timestamp),
            timestamp,
            kind,
            payload,
        };

        self.entries.write().push_front(entry.clone());
        tracing::debug!(log_id = %entry.id, kind = %kind, "Event logged");

        // No subscribers is fine.
        let _ = self.tx.send(entry.clone());
        entry
    }

    /// All entries, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<OrderLog> {
        self.entries.read().iter().cloned().collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Receive every entry appended from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<OrderLog> {
        self.tx.subscribe()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_empty() {
        let logger = EventLogger::new();
        assert!(logger.is_empty());
        assert!(logger.snapshot().is_empty());
    }

    #[test]
    fn newest_entry_first() {
        let logger = EventLogger::new();
        logger.record(LogKind::Request, json!({"n": 1}));
        logger.record(LogKind::Response, json!({"n": 2}));

        let entries = logger.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, LogKind::Response);
        assert_eq!(entries[1].kind, LogKind::Request);
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn record_returns_the_stored_entry() {
        let logger = EventLogger::new();
        let entry = logger.record(LogKind::Error, json!({"error": "boom"}));

        assert_eq!(logger.snapshot()[0], entry);
        assert_eq!(entry.payload["error"], "boom");
    }

    #[tokio::test]
    async fn subscribers_see_new_entries() {
        let logger = EventLogger::new();
        let mut rx = logger.subscribe();

        let entry = logger.record(LogKind::Request, json!({}));

        assert_eq!(rx.recv().await.unwrap(), entry);
    }
}
