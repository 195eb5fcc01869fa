//! Order Entry Value Objects

mod order_form;
mod order_request;
mod order_side;
mod order_type;

pub use order_form::OrderForm;
pub use order_request::OrderRequest;
pub use order_side::OrderSide;
pub use order_type::OrderType;

/// Error for text that names no known side or order type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
