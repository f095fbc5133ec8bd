//! The money value object.

use serde::{Deserialize, Serialize};

use crate::{Currency, MoneyError};

/// An amount of money in minor units (e.g. cents) of a single currency.
///
/// Values are immutable; every operation returns a new `Money`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in minor units (e.g., 1000 = 10.00 USD)
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a new amount from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Returns zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Returns the amount in minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if both values share a currency.
    pub fn is_same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Adds another amount of the same currency.
    ///
    /// Fails on a currency mismatch or if the sum overflows.
    pub fn checked_add(&self, other: Money) -> crate::Result<Money> {
        self.ensure_same_currency(&other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or_else(|| self.overflow("add"))
    }

    /// Subtracts another amount of the same currency.
    ///
    /// Fails on a currency mismatch or if the difference overflows.
    pub fn checked_sub(&self, other: Money) -> crate::Result<Money> {
        self.ensure_same_currency(&other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or_else(|| self.overflow("subtract"))
    }

    /// Multiplies by a whole factor, failing on overflow.
    pub fn checked_multiply(&self, factor: i64) -> crate::Result<Money> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or_else(|| self.overflow("multiply"))
    }

    /// Multiplies by a whole factor.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows. Use [`Money::checked_multiply`] to
    /// handle that as an error.
    pub fn multiply(&self, factor: i64) -> Money {
        match self.checked_multiply(factor) {
            Ok(product) => product,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the amount with its sign flipped.
    ///
    /// # Panics
    ///
    /// Panics if the amount is `i64::MIN`.
    pub fn negate(&self) -> Money {
        match self.amount.checked_neg() {
            Some(amount) => Money::new(amount, self.currency),
            None => panic!("{}", self.overflow("negate")),
        }
    }

    fn overflow(&self, operation: &'static str) -> MoneyError {
        MoneyError::Overflow {
            operation,
            currency: self.currency,
        }
    }

    fn ensure_same_currency(&self, other: &Money) -> crate::Result<()> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            })
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        write!(f, "{sign}{}.{:02} {}", abs / 100, abs % 100, self.currency)
    }
}

/// # Panics
///
/// Panics if the currencies differ or the sum overflows. Use
/// [`Money::checked_add`] to handle either as an error.
impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
///
/// Panics if the currencies differ or the difference overflows. Use
/// [`Money::checked_sub`] to handle either as an error.
impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
