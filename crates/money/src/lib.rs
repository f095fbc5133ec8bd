//! Monetary values for the pricing workspace.
//!
//! This crate provides the small amount-plus-currency value type that
//! price modifiers transform. It deliberately stops at same-currency
//! arithmetic: rounding and conversion are left to callers.

pub mod currency;
pub mod error;
pub mod money;

pub use currency::Currency;
pub use error::{MoneyError, Result};
pub use money::Money;
