//! Execution Value Objects

mod execution_order;
mod order_log;
mod ui_status;

pub use execution_order::ExecutionOrder;
pub use order_log::{LogKind, OrderLog};
pub use ui_status::UiStatus;
