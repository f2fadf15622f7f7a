//! Temperature quantities.
//!
//! The canonical unit is the kelvin. Celsius is an affine unit: same scale,
//! zero point shifted by the freezing point of water.
//!
//! ```rust
//! use unitsys_core::units::temperature::{celsius, kelvin};
//!
//! assert_eq!(celsius(0.0), kelvin(273.15));
//! assert!(celsius(37.0) > kelvin(300.0));
//! ```

use crate::constants::WATER_FREEZING_POINT;
use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for thermodynamic temperature.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "K")]
pub enum TemperatureKind {}

/// A temperature quantity.
pub type Temperature = Quantity<TemperatureKind>;

crate::unit_constructors! {
    Temperature {
        /// Kelvin (SI base unit).
        kelvin => 1.0,
    }
}

/// Degrees Celsius (`T_K = T_C + 273.15`).
#[inline]
pub const fn celsius(value: f64) -> Temperature {
    Temperature::affine(value, 1.0, WATER_FREEZING_POINT)
}
