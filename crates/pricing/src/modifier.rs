//! The price modifier value object.

use money::Money;

use crate::amendable::PriceAmendable;
use crate::kind::ModifierType;
use crate::transform::Transform;

/// Result of evaluating a modifier against an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Application {
    /// The transform ran and produced this amount.
    Applied(Money),
    /// The modifier has no transform and was skipped.
    Inert,
}

impl Application {
    /// Returns the adjusted amount, or `None` if the modifier was skipped.
    pub fn into_money(self) -> Option<Money> {
        match self {
            Application::Applied(money) => Some(money),
            Application::Inert => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Application::Applied(_))
    }
}

/// A keyed, classified adjustment of a monetary amount.
///
/// A modifier is configured once and never changes afterwards. The owning
/// price decides when to run it: [`Modifier::is_before_vat`] tells whether it
/// belongs before or after the VAT amount is computed.
///
/// Construction never fails. A modifier built without a usable function
/// simply does not apply; see [`Modifier::evaluate`].
#[derive(Debug, Clone)]
pub struct Modifier {
    key: Option<String>,
    kind: ModifierType,
    before_vat: bool,
    transform: Transform,
}

impl Modifier {
    /// Creates an unkeyed `other` modifier applied after VAT.
    ///
    /// `transform` may be a [`Transform`], a closure, or an `Option` of a
    /// closure where `None` yields an inert modifier.
    pub fn new(transform: impl Into<Transform>) -> Self {
        Self::builder().build(transform)
    }

    /// Creates a new modifier builder.
    pub fn builder() -> ModifierBuilder {
        ModifierBuilder::default()
    }

    /// Returns the identification key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the classification.
    pub fn kind(&self) -> &ModifierType {
        &self.kind
    }

    /// Returns the classification tag (`tax`, `discount`, `other`, ...).
    ///
    /// Never empty: an unset or empty type reads as `other`.
    pub fn type_name(&self) -> &str {
        self.kind.as_str()
    }

    /// Whether the modifier runs before the VAT amount is computed.
    pub fn is_before_vat(&self) -> bool {
        self.before_vat
    }

    /// Returns the wrapped transform.
    ///
    /// Lets an owner tell inert modifiers apart without applying them.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Applies the modifier, reporting whether it actually ran.
    ///
    /// The transform is called exactly once and its result returned
    /// untouched; currency and precision are its own concern.
    pub fn evaluate(&self, value: Money) -> Application {
        match self.transform.call(value) {
            Some(adjusted) => {
                tracing::trace!(key = ?self.key, kind = %self.kind, %value, %adjusted, "modifier applied");
                metrics::counter!("price_modifier_applied_total", "kind" => self.kind.metric_label())
                    .increment(1);
                Application::Applied(adjusted)
            }
            None => {
                tracing::debug!(key = ?self.key, kind = %self.kind, "modifier has no transform, skipping");
                metrics::counter!("price_modifier_skipped_total", "kind" => self.kind.metric_label())
                    .increment(1);
                Application::Inert
            }
        }
    }
}

impl PriceAmendable for Modifier {
    fn apply(&self, value: Money) -> Option<Money> {
        self.evaluate(value).into_money()
    }
}

/// Builder for constructing modifiers.
#[derive(Debug, Default)]
pub struct ModifierBuilder {
    key: Option<String>,
    kind: ModifierType,
    before_vat: bool,
}

impl ModifierBuilder {
    /// Sets the identification key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the classification. Empty strings and `None` read as `other`.
    pub fn kind(mut self, kind: impl Into<ModifierType>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets whether the modifier runs before VAT. Defaults to `false`.
    pub fn before_vat(mut self, before_vat: bool) -> Self {
        self.before_vat = before_vat;
        self
    }

    /// Builds the modifier around `transform`.
    pub fn build(self, transform: impl Into<Transform>) -> Modifier {
        Modifier {
            key: self.key,
            kind: self.kind,
            before_vat: self.before_vat,
            transform: transform.into(),
        }
    }
}
