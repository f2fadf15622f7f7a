//! Mass quantities.
//!
//! The canonical unit is the SI kilogram, so the gram ladder scales down from
//! `1e-3` rather than `1.0`.

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for mass.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "kg")]
pub enum MassKind {}

/// A mass quantity.
pub type Mass = Quantity<MassKind>;

crate::unit_constructors! {
    Mass {
        /// Attograms (`1 ag = 10^-21 kg`).
        attograms => 1e-21,
        /// Femtograms (`1 fg = 10^-18 kg`).
        femtograms => 1e-18,
        /// Picograms (`1 pg = 10^-15 kg`).
        picograms => 1e-15,
        /// Nanograms (`1 ng = 10^-12 kg`).
        nanograms => 1e-12,
        /// Micrograms (`1 µg = 10^-9 kg`).
        micrograms => 1e-9,
        /// Milligrams (`1 mg = 10^-6 kg`).
        milligrams => 1e-6,
        /// Grams (`1 g = 10^-3 kg`).
        grams => 1e-3,
        /// Kilograms (SI base unit).
        kilograms => 1.0,
        /// Tonnes (`1 t = 1000 kg`).
        tonnes => 1_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn tonne_is_thousand_kilograms() {
        assert_eq!(tonnes(1.0), kilograms(1000.0));
    }

    #[test]
    fn grams_to_kilograms() {
        let m = grams(500.0).convert_like(kilograms(0.0));
        assert_abs_diff_eq!(m.value(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn gram_ladder() {
        assert_eq!(milligrams(1000.0), grams(1.0));
        assert_eq!(micrograms(1000.0), milligrams(1.0));
        assert_eq!(nanograms(1000.0), micrograms(1.0));
        assert_eq!(picograms(1000.0), nanograms(1.0));
        assert_eq!(femtograms(1000.0), picograms(1.0));
        assert_eq!(attograms(1000.0), femtograms(1.0));
    }
}
