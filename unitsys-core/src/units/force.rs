//! Force quantities.
//!
//! The canonical unit is the SI newton.

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for force.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "N")]
pub enum ForceKind {}

/// A force quantity.
pub type Force = Quantity<ForceKind>;

crate::unit_constructors! {
    Force {
        /// Micronewtons (`1 µN = 10^-6 N`).
        micronewtons => 1e-6,
        /// Millinewtons (`1 mN = 10^-3 N`).
        millinewtons => 1e-3,
        /// Newtons (SI base unit).
        newtons => 1.0,
        /// Kilonewtons (`1 kN = 10^3 N`).
        kilonewtons => 1e3,
        /// Meganewtons (`1 MN = 10^6 N`).
        meganewtons => 1e6,
    }
}
