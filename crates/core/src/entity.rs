//! Entity trait: identity + the capabilities repositories rely on.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Capability: the entity carries a stock quantity.
///
/// Quantities are `i64` so that out-of-range inputs stay representable long
/// enough to be rejected; stored values are kept non-negative by
/// [`Repository::update_quantity`](crate::Repository::update_quantity).
pub trait Quantified {
    /// Current quantity on hand.
    fn quantity(&self) -> i64;

    /// Replace the quantity.
    fn set_quantity(&mut self, quantity: i64);
}
