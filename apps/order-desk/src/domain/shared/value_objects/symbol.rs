//! Symbol value object for trading pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest symbol the exchange accepts.
const MAX_SYMBOL_LEN: usize = 20;

/// A trading pair identifier, e.g. "BTCUSDT".
///
/// Always trimmed and uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

/// Reasons a symbol is unusable for order entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    /// Nothing but whitespace was entered.
    #[error("symbol required")]
    Empty,
    /// Contains something other than ASCII letters and digits.
    #[error("symbol must be alphanumeric")]
    InvalidCharacters,
    /// Longer than any listed pair.
    #[error("symbol exceeds maximum length")]
    TooLong,
}

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed and normalized to uppercase.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_uppercase())
    }

    /// Canonicalize then validate raw user input.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, SymbolError> {
        let symbol = Self::new(value);
        symbol.validate()?;
        Ok(symbol)
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate the symbol for order submission.
    pub fn validate(&self) -> Result<(), SymbolError> {
        if self.0.is_empty() {
            return Err(SymbolError::Empty);
        }

        if !self.0.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SymbolError::InvalidCharacters);
        }

        if self.0.len() > MAX_SYMBOL_LEN {
            return Err(SymbolError::TooLong);
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
