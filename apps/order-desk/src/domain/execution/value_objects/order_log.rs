//! Event log record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::domain::shared::{RecordId, Timestamp};

/// What an event-log entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// The outgoing order request.
    Request,
    /// A successful response.
    Response,
    /// A rejection or a failed call.
    Error,
}

impl LogKind {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
            Self::Error => "error",
        }
    }

    /// True for the kinds that close an attempt.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Response | Self::Error)
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic entry in the event log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLog {
    /// Unique within the session.
    pub id: RecordId,
    /// When the entry was recorded.
    pub timestamp: Timestamp,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: LogKind,
    /// Free-form diagnostic data.
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_kinds() {
        assert!(!LogKind::Request.is_terminal());
        assert!(LogKind::Response.is_terminal());
        assert!(LogKind::Error.is_terminal());
    }

    #[test]
    fn log_kind_serde() {
        assert_eq!(serde_json::to_string(&LogKind::Response).unwrap(), "\"response\"");
        let parsed: LogKind = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, LogKind::Error);
    }
}
