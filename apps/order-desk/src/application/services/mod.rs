//! Application Services
//!
//! Application services hold session state shared by the use cases. Both
//! streams here only ever grow, by prepending.

mod event_logger;
mod execution_history;

pub use event_logger::{DEFAULT_SUBSCRIBER_CAPACITY, EventLogger};
pub use execution_history::{
    EMPTY_HISTORY_MESSAGE, ExecutionHistoryStore, HistoryError, HistoryView,
};
