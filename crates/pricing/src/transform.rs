//! The adjustment function a modifier wraps.

use std::sync::Arc;

use money::Money;

type TransformFn = dyn Fn(Money) -> Money + Send + Sync;

/// The transformation applied by a modifier.
///
/// A modifier may be configured without a usable function. Rather than
/// failing at construction, that case is represented as [`Transform::Inert`]
/// and the modifier reports itself as not applicable when used.
#[derive(Clone, Default)]
pub enum Transform {
    /// A function from the incoming amount to the adjusted amount.
    Invocable(Arc<TransformFn>),
    /// No function; applying yields nothing.
    #[default]
    Inert,
}

impl Transform {
    /// Wraps a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Money) -> Money + Send + Sync + 'static,
    {
        Transform::Invocable(Arc::new(f))
    }

    /// Returns a transform that never applies.
    pub fn inert() -> Self {
        Transform::Inert
    }

    /// Wraps a function if one is given, otherwise returns [`Transform::Inert`].
    pub fn from_option<F>(f: Option<F>) -> Self
    where
        F: Fn(Money) -> Money + Send + Sync + 'static,
    {
        f.map_or(Transform::Inert, Transform::new)
    }

    pub fn is_invocable(&self) -> bool {
        matches!(self, Transform::Invocable(_))
    }

    /// Runs the function once, or returns `None` if there is none.
    ///
    /// The result is passed through as-is. Panics raised by the function
    /// propagate to the caller.
    pub fn call(&self, value: Money) -> Option<Money> {
        match self {
            Transform::Invocable(f) => Some(f(value)),
            Transform::Inert => None,
        }
    }
}

impl<F> From<F> for Transform
where
    F: Fn(Money) -> Money + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Transform::new(f)
    }
}

impl<F> From<Option<F>> for Transform
where
    F: Fn(Money) -> Money + Send + Sync + 'static,
{
    fn from(f: Option<F>) -> Self {
        Transform::from_option(f)
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transform::Invocable(_) => f.write_str("Invocable(..)"),
            Transform::Inert => f.write_str("Inert"),
        }
    }
}
