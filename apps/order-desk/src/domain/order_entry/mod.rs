//! Order Entry Bounded Context
//!
//! Turns what the operator typed into an order request the exchange will
//! accept, or explains which field is wrong.
//!
//! # Key Concepts
//!
//! - **Order Form**: raw, unvalidated field values as entered
//! - **Order Request**: immutable, validated payload, one per attempt
//! - **Request Builder**: the validation rules and their order

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::ValidationError;
pub use services::OrderRequestBuilder;
pub use value_objects::{OrderForm, OrderRequest, OrderSide, OrderType, ParseEnumError};
