//! Exchange status to UI status mapping.

use crate::domain::execution::value_objects::UiStatus;

/// Map an exchange-native order status to a [`UiStatus`].
///
/// | exchange status | UI status |
/// |---|---|
/// | `FILLED`, `PARTIALLY_FILLED` | Filled |
/// | `NEW`, `PENDING_NEW` | Pending |
/// | anything else, or missing | Failed |
///
/// Matching ignores case and surrounding whitespace.
#[must_use]
pub fn map_status(status: Option<&str>) -> UiStatus {
    let Some(status) = status else {
        return UiStatus::Failed;
    };

    match status.trim().to_ascii_uppercase().as_str() {
        "FILLED" | "PARTIALLY_FILLED" => UiStatus::Filled,
        "NEW" | "PENDING_NEW" => UiStatus::Pending,
        _ => UiStatus::Failed,
    }
}
