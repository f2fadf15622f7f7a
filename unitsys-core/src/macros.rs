//! Macros for declaring unit constructors.

/// Declares `const fn` unit constructors for a quantity alias.
///
/// Each row names a constructor and the multiplier of the unit it builds,
/// relative to the kind's canonical unit. Doc comments on the rows are carried
/// onto the generated functions.
///
/// # Examples
///
/// ```rust
/// use unitsys_core::{unit_constructors, Kind, Quantity};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub enum AngleKind {}
/// impl Kind for AngleKind {
///     const SYMBOL: &'static str = "rad";
/// }
///
/// /// An angle quantity.
/// pub type Angle = Quantity<AngleKind>;
///
/// unit_constructors! {
///     Angle {
///         /// Radians.
///         radians => 1.0,
///         /// Degrees.
///         degrees => core::f64::consts::PI / 180.0,
///     }
/// }
///
/// assert!((degrees(180.0) / radians(1.0) - core::f64::consts::PI).abs() < 1e-12);
/// ```
#[macro_export]
macro_rules! unit_constructors {
    ($alias:ty { $($(#[$meta:meta])* $name:ident => $multiplier:expr),+ $(,)? }) => {
        $(
            $(#[$meta])*
            #[inline]
            pub const fn $name(value: f64) -> $alias {
                <$alias>::scaled(value, $multiplier)
            }
        )+
    };
}
