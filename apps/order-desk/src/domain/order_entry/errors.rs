//! Order entry errors.

use crate::domain::shared::SymbolError;

/// The first order-form constraint an entry failed.
///
/// Messages are shown to the operator as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Symbol missing or malformed.
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    /// Quantity left blank.
    #[error("quantity required")]
    QuantityRequired,

    /// Quantity is not a number above zero.
    #[error("quantity must be a positive number")]
    QuantityInvalid,

    /// Quantity is positive but too large or too finely divided to represent.
    #[error("quantity is outside the supported range")]
    QuantityOutOfRange,

    /// Limit price left blank on a LIMIT or STOP order.
    #[error("price required")]
    PriceRequired,

    /// Limit price is not a number above zero.
    #[error("price must be a positive number")]
    PriceInvalid,

    /// Limit price is positive but not representable.
    #[error("price is outside the supported range")]
    PriceOutOfRange,

    /// Stop price left blank on a STOP order.
    #[error("stop price required")]
    StopPriceRequired,

    /// Stop price is not a number above zero.
    #[error("stop price must be a positive number")]
    StopPriceInvalid,

    /// Stop price is positive but not representable.
    #[error("stop price is outside the supported range")]
    StopPriceOutOfRange,
}

impl ValidationError {
    /// Name of the offending form field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Symbol(_) => "symbol",
            Self::QuantityRequired | Self::QuantityInvalid | Self::QuantityOutOfRange => {
                "quantity"
            }
            Self::PriceRequired | Self::PriceInvalid | Self::PriceOutOfRange => "price",
            Self::StopPriceRequired | Self::StopPriceInvalid | Self::StopPriceOutOfRange => {
                "stop_price"
            }
        }
    }
}
