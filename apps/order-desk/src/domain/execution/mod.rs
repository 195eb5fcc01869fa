//! Execution Bounded Context
//!
//! What the desk remembers about each attempt once the exchange has
//! answered (or failed to).
//!
//! # Key Concepts
//!
//! - **UI Status**: `Filled`, `Pending` or `Failed`, decoupled from the
//!   exchange's status vocabulary
//! - **Status Mapper**: total function from exchange status to UI status
//! - **Execution Order**: one normalized history record per remote verdict
//! - **Order Log**: raw request / response / error diagnostics

pub mod services;
pub mod value_objects;

pub use services::map_status;
pub use value_objects::{ExecutionOrder, LogKind, OrderLog, UiStatus};
