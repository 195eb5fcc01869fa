//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for use case outputs shown to the operator.

mod notification;

pub use notification::{DEFAULT_REJECTION_REASON, Notification, NotificationLevel};
