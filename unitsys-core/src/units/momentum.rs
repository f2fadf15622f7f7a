//! Momentum quantities.
//!
//! The canonical unit is the kilogram meter per second.

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for momentum.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "kg*m/s")]
pub enum MomentumKind {}

/// A momentum quantity.
pub type Momentum = Quantity<MomentumKind>;

crate::unit_constructors! {
    Momentum {
        /// Kilogram meters per second (canonical unit).
        kilogram_meters_per_second => 1.0,
    }
}
