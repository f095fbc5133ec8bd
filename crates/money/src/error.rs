//! Money error types.

use thiserror::Error;

use crate::Currency;

/// Errors that can occur when building or combining money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: cannot combine {left} with {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// The result does not fit in the amount's range.
    #[error("Arithmetic overflow: {operation} on {currency} amount")]
    Overflow {
        operation: &'static str,
        currency: Currency,
    },

    /// A currency code was not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),
}

/// Result type for money operations.
pub type Result<T> = std::result::Result<T, MoneyError>;
