//! Status shown to the operator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an order as the desk presents it.
///
/// Exchanges report a dozen or so lifecycle states; the desk collapses them
/// into three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiStatus {
    /// Fully or partially executed.
    Filled,
    /// Accepted and resting on the book.
    Pending,
    /// Rejected, canceled, expired, or an unrecognized state.
    Failed,
}

impl UiStatus {
    /// Display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Filled => "Filled",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for UiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
