//! Luminous intensity quantities.
//!
//! The canonical unit is the SI candela.

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for luminous intensity.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "cd")]
pub enum LuminousIntensityKind {}

/// A luminous intensity quantity.
pub type LuminousIntensity = Quantity<LuminousIntensityKind>;

crate::unit_constructors! {
    LuminousIntensity {
        /// Millicandelas (`1 mcd = 10^-3 cd`).
        millicandelas => 1e-3,
        /// Candelas (SI base unit).
        candelas => 1.0,
        /// Kilocandelas (`1 kcd = 10^3 cd`).
        kilocandelas => 1e3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candela_ladder() {
        assert_eq!(millicandelas(1000.0), candelas(1.0));
        assert_eq!(kilocandelas(1.0), candelas(1000.0));
    }
}
