//! Price modifiers.
//!
//! This crate provides:
//! - [`PriceAmendable`], the capability an owning price applies uniformly
//! - [`Modifier`], a keyed, classified adjustment that runs before or after VAT
//! - [`Transform`], the function a modifier wraps, or `Inert` when there is none
//! - [`ModifierType`], the `tax` / `discount` / `other` classification
//!
//! ```
//! use money::{Currency, Money};
//! use pricing::{Modifier, PriceAmendable, Transform};
//!
//! let shipping = Modifier::builder()
//!     .key("shipping")
//!     .build(Transform::new(|m| m + Money::new(500, Currency::USD)));
//!
//! let total = shipping.apply(Money::new(1000, Currency::USD));
//! assert_eq!(total, Some(Money::new(1500, Currency::USD)));
//! assert_eq!(shipping.type_name(), "other");
//! ```

pub mod amendable;
pub mod kind;
pub mod modifier;
pub mod transform;

pub use amendable::PriceAmendable;
pub use kind::{ModifierType, TYPE_DISCOUNT, TYPE_TAX, TYPE_UNDEFINED};
pub use modifier::{Application, Modifier, ModifierBuilder};
pub use transform::Transform;

pub use money::{Currency, Money};
