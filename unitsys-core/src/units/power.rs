//! Power quantities.
//!
//! The canonical unit is the SI watt.

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for power.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "W")]
pub enum PowerKind {}

/// A power quantity.
pub type Power = Quantity<PowerKind>;

crate::unit_constructors! {
    Power {
        /// Microwatts (`1 µW = 10^-6 W`).
        microwatts => 1e-6,
        /// Milliwatts (`1 mW = 10^-3 W`).
        milliwatts => 1e-3,
        /// Watts (SI base unit).
        watts => 1.0,
        /// Kilowatts (`1 kW = 10^3 W`).
        kilowatts => 1e3,
        /// Megawatts (`1 MW = 10^6 W`).
        megawatts => 1e6,
        /// Gigawatts (`1 GW = 10^9 W`).
        gigawatts => 1e9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watt_ladder() {
        assert_eq!(milliwatts(1000.0), watts(1.0));
        assert_eq!(kilowatts(1.0), watts(1000.0));
        assert_eq!(megawatts(1.0), kilowatts(1000.0));
        assert_eq!(gigawatts(1.0), megawatts(1000.0));
    }
}
