//! Order Entry Services

mod request_builder;

pub use request_builder::OrderRequestBuilder;
