//! Strongly-typed identifiers for session records.
//!
//! These prevent mixing up locally generated record ids with the ids the
//! exchange assigns to orders.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::Timestamp;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(
    RecordId,
    "Locally generated identifier for a history or event-log record."
);
define_id!(ExchangeOrderId, "Exchange-assigned identifier for an order.");

impl ExchangeOrderId {
    /// Sentinel used when the exchange never assigned an id.
    pub const UNKNOWN: &'static str = "unknown";

    /// The `"unknown"` sentinel id.
    #[must_use]
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Returns true if this is the `"unknown"` sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

/// Generator for time-derived, strictly increasing record ids.
///
/// Ids have the form `{unix_millis}-{sequence}`; the sequence makes ids
/// unique even when several records share a millisecond.
#[derive(Debug)]
pub struct IdSequence {
    prefix: &'static str,
    next: AtomicU64,
}

impl IdSequence {
    /// Create a sequence whose ids start with `prefix`.
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }

    /// Produce the next id.
    pub fn next_id(&self, at: Timestamp) -> RecordId {
        let seq = self.next.fetch_add(1, Ordering::Relaxed);
        RecordId(format!("{}{}-{seq:06}", self.prefix, at.unix_millis()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_new_and_display() {
        let id = RecordId::new("1768824000000-000001");
        assert_eq!(id.as_str(), "1768824000000-000001");
        assert_eq!(format!("{id}"), "1768824000000-000001");
    }

    #[test]
    fn exchange_order_id_unknown_sentinel() {
        let id = ExchangeOrderId::unknown();
        assert_eq!(id.as_str(), "unknown");
        assert!(id.is_unknown());
        assert!(!ExchangeOrderId::new("4023918").is_unknown());
    }

    #[test]
    fn sequence_ids_are_unique_within_one_millisecond() {
        let seq = IdSequence::new("");
        let at = Timestamp::parse("2026-01-19T12:00:00Z").unwrap();

        let first = seq.next_id(at);
        let second = seq.next_id(at);

        assert_ne!(first, second);
        assert_eq!(first.as_str(), "1768824000000-000001");
        assert_eq!(second.as_str(), "1768824000000-000002");
    }

    #[test]
    fn sequence_prefix_is_applied() {
        let seq = IdSequence::new("log-");
        let id = seq.next_id(Timestamp::parse("2026-01-19T12:00:00Z").unwrap());
        assert!(id.as_str().starts_with("log-1768824000000-"));
    }

    #[test]
    fn serde_roundtrip() {
        let id = ExchangeOrderId::new("4023918");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"4023918\"");

        let parsed: ExchangeOrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn hash_works_for_collections() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(RecordId::new("a"));
        set.insert(RecordId::new("b"));
        set.insert(RecordId::new("a")); // duplicate

        assert_eq!(set.len(), 2);
    }
}
