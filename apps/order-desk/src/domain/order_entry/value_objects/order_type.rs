//! Order type (market, limit, stop-limit).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;

/// Order type specifying execution behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - execute at best available price.
    #[default]
    Market,
    /// Limit order - execute at specified price or better.
    Limit,
    /// Stop-limit order - places a limit order once the stop price trades.
    Stop,
}

impl OrderType {
    /// Returns true if this order type requires a limit price.
    #[must_use]
    pub const fn requires_price(&self) -> bool {
        matches!(self, Self::Limit | Self::Stop)
    }

    /// Returns true if this order type requires a stop trigger price.
    #[must_use]
    pub const fn requires_stop_price(&self) -> bool {
        matches!(self, Self::Stop)
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
        }
    }

    /// Human label used on the order form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Limit => "Limit",
            Self::Stop => "Stop-Limit",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = ParseEnumError;

    /// Case-insensitive. `STOP_LIMIT` is accepted as an exchange spelling of
    /// a stop-limit order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            "STOP" | "STOP_LIMIT" => Ok(Self::Stop),
            _ => Err(ParseEnumError::new("order type", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_type_requires_price() {
        assert!(!OrderType::Market.requires_price());
        assert!(OrderType::Limit.requires_price());
        assert!(OrderType::Stop.requires_price());
    }

    #[test]
    fn order_type_requires_stop_price() {
        assert!(!OrderType::Market.requires_stop_price());
        assert!(!OrderType::Limit.requires_stop_price());
        assert!(OrderType::Stop.requires_stop_price());
    }

    #[test]
    fn order_type_display_and_label() {
        assert_eq!(format!("{}", OrderType::Market), "MARKET");
        assert_eq!(format!("{}", OrderType::Stop), "STOP");
        assert_eq!(OrderType::Stop.label(), "Stop-Limit");
    }

    #[test]
    fn order_type_parse() {
        assert_eq!("limit".parse::<OrderType>(), Ok(OrderType::Limit));
        assert_eq!("STOP_LIMIT".parse::<OrderType>(), Ok(OrderType::Stop));
        assert!("twap".parse::<OrderType>().is_err());
    }

    #[test]
    fn order_type_serde() {
        let json = serde_json::to_string(&OrderType::Stop).unwrap();
        assert_eq!(json, "\"STOP\"");

        let parsed: OrderType = serde_json::from_str("\"MARKET\"").unwrap();
        assert_eq!(parsed, OrderType::Market);
    }
}
