//! Order Request Builder
//!
//! Validates an [`OrderForm`] and produces an [`OrderRequest`].
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. symbol (present, alphanumeric)
//! 2. quantity (present, positive)
//! 3. price, if the order type needs one
//! 4. stop price, if the order type is STOP
//!
//! Fields the order type does not use are ignored.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::order_entry::errors::ValidationError;
use crate::domain::order_entry::value_objects::{OrderForm, OrderRequest};
use crate::domain::shared::Symbol;

/// Stateless validator for order entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderRequestBuilder;

impl OrderRequestBuilder {
    /// Create a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate `form` and build the request, or name the first unmet rule.
    pub fn build(&self, form: &OrderForm) -> Result<OrderRequest, ValidationError> {
        let symbol = Symbol::parse(&form.symbol)?;

        let quantity = QUANTITY.parse(&form.quantity)?;

        let price = if form.order_type.requires_price() {
            Some(PRICE.parse(&form.price)?)
        } else {
            None
        };

        let stop_price = if form.order_type.requires_stop_price() {
            Some(STOP_PRICE.parse(&form.stop_price)?)
        } else {
            None
        };

        Ok(OrderRequest::new(
            symbol,
            form.side,
            form.order_type,
            quantity,
            price,
            stop_price,
        ))
    }
}

/// The errors one amount field reports.
struct AmountField {
    missing: ValidationError,
    invalid: ValidationError,
    out_of_range: ValidationError,
}

const QUANTITY: AmountField = AmountField {
    missing: ValidationError::QuantityRequired,
    invalid: ValidationError::QuantityInvalid,
    out_of_range: ValidationError::QuantityOutOfRange,
};

const PRICE: AmountField = AmountField {
    missing: ValidationError::PriceRequired,
    invalid: ValidationError::PriceInvalid,
    out_of_range: ValidationError::PriceOutOfRange,
};

const STOP_PRICE: AmountField = AmountField {
    missing: ValidationError::StopPriceRequired,
    invalid: ValidationError::StopPriceInvalid,
    out_of_range: ValidationError::StopPriceOutOfRange,
};

impl AmountField {
    /// Parse a strictly positive decimal, accepting plain (`0.5`) and
    /// scientific (`5e-1`) notation.
    ///
    /// A positive number `Decimal` cannot hold exactly (beyond 28 digits of
    /// scale, or above its maximum) is out of range rather than invalid.
    fn parse(self, raw: &str) -> Result<Decimal, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(self.missing);
        }

        match Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
            Ok(value) if value > Decimal::ZERO => Ok(value.normalize()),
            _ if is_positive_real(raw) => Err(self.out_of_range),
            _ => Err(self.invalid),
        }
    }
}

fn is_positive_real(raw: &str) -> bool {
    raw.parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value > 0.0)
}
