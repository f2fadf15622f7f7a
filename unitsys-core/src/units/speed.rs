//! Speed quantities.
//!
//! The canonical unit is the meter per second.

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for speed.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "m/s")]
pub enum SpeedKind {}

/// A speed quantity.
pub type Speed = Quantity<SpeedKind>;

crate::unit_constructors! {
    Speed {
        /// Meters per second (canonical unit).
        meters_per_second => 1.0,
        /// Kilometers per hour (`1 km/h = 1/3.6 m/s`).
        kilometers_per_hour => 1.0 / 3.6,
    }
}
