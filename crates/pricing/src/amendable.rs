//! The price amendment capability.

use std::sync::Arc;

use money::Money;

/// Something that can adjust a monetary value.
///
/// An owning price holds a heterogeneous collection of amendables
/// (`Vec<Box<dyn PriceAmendable>>`) and applies each one without knowing
/// whether it is a tax, a discount or something else. New kinds of
/// adjustment implement this trait directly.
pub trait PriceAmendable {
    /// Applies the adjustment to `value`.
    ///
    /// Returns `None` when the adjustment does not apply, in which case the
    /// caller should carry `value` forward unchanged.
    fn apply(&self, value: Money) -> Option<Money>;
}

impl<T: PriceAmendable + ?Sized> PriceAmendable for &T {
    fn apply(&self, value: Money) -> Option<Money> {
        (**self).apply(value)
    }
}

impl<T: PriceAmendable + ?Sized> PriceAmendable for Box<T> {
    fn apply(&self, value: Money) -> Option<Money> {
        (**self).apply(value)
    }
}

impl<T: PriceAmendable + ?Sized> PriceAmendable for Arc<T> {
    fn apply(&self, value: Money) -> Option<Money> {
        (**self).apply(value)
    }
}
