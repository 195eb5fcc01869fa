//! Operator notification DTO

use serde::Serialize;
use std::fmt;

use crate::domain::execution::ExecutionOrder;

/// Generic reason shown when a rejection carries no detail.
pub const DEFAULT_REJECTION_REASON: &str = "Order rejected by server.";

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// The order went through.
    Success,
    /// Validation, rejection or transport failure.
    Error,
}

/// Short message shown to the operator after an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Headline.
    pub title: String,
    /// Secondary line.
    pub description: Option<String>,
}

impl Notification {
    /// `Order #{orderId} placed — {status}` with `{side} {qty} {symbol}` below.
    #[must_use]
    pub fn order_placed(order: &ExecutionOrder) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: format!("Order #{} placed — {}", order.order_id, order.status),
            description: Some(format!(
                "{} {} {}",
                order.side,
                order.quantity.normalize(),
                order.symbol
            )),
        }
    }

    /// `Order failed — {reason}`, falling back to a generic reason.
    #[must_use]
    pub fn order_rejected(detail: Option<&str>) -> Self {
        let reason = detail
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_REJECTION_REASON);
        Self::error(format!("Order failed — {reason}"))
    }

    /// `Request failed — {message}`.
    #[must_use]
    pub fn request_failed(message: &str) -> Self {
        Self::error(format!("Request failed — {message}"))
    }

    /// A validation message, shown as-is.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::error(message.into())
    }

    fn error(title: String) -> Self {
        Self {
            level: NotificationLevel::Error,
            title,
            description: None,
        }
    }

    /// True for error notifications.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        if let Some(description) = &self.description {
            write!(f, "\n  {description}")?;
        }
        Ok(())
    }
}
