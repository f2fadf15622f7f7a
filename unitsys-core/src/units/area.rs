//! Area quantities.
//!
//! The canonical unit is the square meter. Area multipliers are the squares
//! of the matching length multipliers, which keeps `sqrt` exact on the unit.

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for area.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "m^2")]
pub enum AreaKind {}

/// An area quantity.
pub type Area = Quantity<AreaKind>;

crate::unit_constructors! {
    Area {
        /// Square nanometers (`1 nm^2 = 10^-18 m^2`).
        square_nanometers => 1e-18,
        /// Square micrometers (`1 µm^2 = 10^-12 m^2`).
        square_micrometers => 1e-12,
        /// Square millimeters (`1 mm^2 = 10^-6 m^2`).
        square_millimeters => 1e-6,
        /// Square meters (SI base unit).
        square_meters => 1.0,
        /// Ares (`1 a = 100 m^2`).
        ares => 100.0,
        /// Hectares (`1 ha = 10^4 m^2`).
        hectares => 1e4,
        /// Square kilometers (`1 km^2 = 10^6 m^2`).
        square_kilometers => 1e6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hectare_is_100_ares() {
        assert_eq!(hectares(1.0), ares(100.0));
    }

    #[test]
    fn square_kilometers_to_square_meters() {
        let a = square_kilometers(1.0).convert_like(square_meters(0.0));
        assert_abs_diff_eq!(a.value(), 1e6, epsilon = 1e-6);
    }

    #[test]
    fn small_area_ladder() {
        assert_eq!(square_millimeters(1e6), square_meters(1.0));
        assert_eq!(square_micrometers(1e6), square_millimeters(1.0));
        assert_eq!(square_nanometers(1e6), square_micrometers(1.0));
    }
}
