//! Electric current quantities.
//!
//! The canonical unit is the SI ampere.

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for electric current.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "A")]
pub enum ElectricCurrentKind {}

/// An electric current quantity.
pub type ElectricCurrent = Quantity<ElectricCurrentKind>;

crate::unit_constructors! {
    ElectricCurrent {
        /// Attoamperes (`1 aA = 10^-18 A`).
        attoamperes => 1e-18,
        /// Femtoamperes (`1 fA = 10^-15 A`).
        femtoamperes => 1e-15,
        /// Picoamperes (`1 pA = 10^-12 A`).
        picoamperes => 1e-12,
        /// Nanoamperes (`1 nA = 10^-9 A`).
        nanoamperes => 1e-9,
        /// Microamperes (`1 µA = 10^-6 A`).
        microamperes => 1e-6,
        /// Milliamperes (`1 mA = 10^-3 A`).
        milliamperes => 1e-3,
        /// Amperes (SI base unit).
        amperes => 1.0,
        /// Kiloamperes (`1 kA = 10^3 A`).
        kiloamperes => 1e3,
        /// Megaamperes (`1 MA = 10^6 A`).
        megaamperes => 1e6,
        /// Gigaamperes (`1 GA = 10^9 A`).
        gigaamperes => 1e9,
        /// Teraamperes (`1 TA = 10^12 A`).
        teraamperes => 1e12,
        /// Petaamperes (`1 PA = 10^15 A`).
        petaamperes => 1e15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ampere_ladder() {
        assert_eq!(milliamperes(1000.0), amperes(1.0));
        assert_eq!(kiloamperes(1.0), amperes(1000.0));
        assert_eq!(megaamperes(1.0), kiloamperes(1000.0));
    }
}
