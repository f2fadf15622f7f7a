//! Amount-of-substance quantities.
//!
//! The canonical unit counts individual things; a mole is an Avogadro
//! constant's worth of them.

use crate::constants::AVOGADRO_CONSTANT;
use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for amount of substance.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "things")]
pub enum AmountKind {}

/// An amount quantity.
pub type Amount = Quantity<AmountKind>;

crate::unit_constructors! {
    Amount {
        /// Individual things (canonical unit).
        things => 1.0,
        /// Moles (`1 mol = 6.02214076e23 things`).
        moles => AVOGADRO_CONSTANT,
    }
}
