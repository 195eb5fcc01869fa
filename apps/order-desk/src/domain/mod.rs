//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic (validation, status mapping)
//!
//! # Bounded Contexts
//!
//! - [`order_entry`]: Form validation and order request construction
//! - [`execution`]: Status normalization, execution history and event-log records
//! - [`shared`]: Symbols, timestamps and identifiers used by both

pub mod execution;
pub mod order_entry;
pub mod shared;
