//! Length quantities.
//!
//! The canonical unit is the SI meter.
//!
//! ```rust
//! use unitsys_core::units::length::{kilometers, meters};
//!
//! assert_eq!(kilometers(1.0), meters(1000.0));
//! ```

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for length.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "m")]
pub enum LengthKind {}

/// A length quantity.
pub type Length = Quantity<LengthKind>;

crate::unit_constructors! {
    Length {
        /// Attometers (`1 am = 10^-18 m`).
        attometers => 1e-18,
        /// Femtometers (`1 fm = 10^-15 m`).
        femtometers => 1e-15,
        /// Picometers (`1 pm = 10^-12 m`).
        picometers => 1e-12,
        /// Nanometers (`1 nm = 10^-9 m`).
        nanometers => 1e-9,
        /// Micrometers (`1 µm = 10^-6 m`).
        micrometers => 1e-6,
        /// Millimeters (`1 mm = 10^-3 m`).
        millimeters => 1e-3,
        /// Centimeters (`1 cm = 10^-2 m`).
        centimeters => 1e-2,
        /// Decimeters (`1 dm = 10^-1 m`).
        decimeters => 1e-1,
        /// Meters (SI base unit).
        meters => 1.0,
        /// Kilometers (`1 km = 1000 m`).
        kilometers => 1_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn kilometers_to_meters() {
        let d = kilometers(2.5).convert_like(meters(0.0));
        assert_abs_diff_eq!(d.value(), 2500.0, epsilon = 1e-12);
    }

    #[test]
    fn metric_ladder() {
        assert_eq!(decimeters(10.0), meters(1.0));
        assert_eq!(centimeters(100.0), meters(1.0));
        assert_eq!(millimeters(1000.0), meters(1.0));
        assert_eq!(micrometers(1000.0), millimeters(1.0));
        assert_eq!(nanometers(1000.0), micrometers(1.0));
        assert_eq!(picometers(1000.0), nanometers(1.0));
        assert_eq!(femtometers(1000.0), picometers(1.0));
        assert_eq!(attometers(1000.0), femtometers(1.0));
    }
}
