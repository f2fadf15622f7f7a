//! The [`Kind`] marker trait.

/// Marker trait identifying a kind of physical quantity.
///
/// A kind (time, length, energy, ...) is represented by an uninhabited enum
/// implementing this trait. [`Quantity`](crate::Quantity) distinguishes kinds
/// purely through this type parameter: quantities of different kinds cannot be
/// mixed except through the declared cross-kind relations.
///
/// The associated `SYMBOL` is the printable symbol of the kind's canonical
/// (SI base) unit, used by `Display` and the unit-tagged serde format.
///
/// Implement this via `#[derive(Kind)]` with a `#[kind(symbol = "...")]`
/// attribute rather than by hand.
///
/// # Examples
///
/// ```rust
/// use unitsys_core::{Kind, Quantity};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub enum AngleKind {}
/// impl Kind for AngleKind {
///     const SYMBOL: &'static str = "rad";
/// }
///
/// let a = Quantity::<AngleKind>::new(1.5);
/// assert_eq!(a.value(), 1.5);
/// ```
pub trait Kind: Copy + PartialEq + core::fmt::Debug + 'static {
    /// Printable symbol of this kind's canonical unit.
    const SYMBOL: &'static str;
}
