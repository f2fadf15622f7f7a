//! Acceleration quantities.
//!
//! The canonical unit is the meter per second squared.

use crate::constants::STANDARD_GRAVITY;
use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "m/s^2")]
pub enum AccelerationKind {}

/// An acceleration quantity.
pub type Acceleration = Quantity<AccelerationKind>;

crate::unit_constructors! {
    Acceleration {
        /// Meters per second squared (canonical unit).
        meters_per_second_squared => 1.0,
        /// Standard gravity (`1 g0 = 9.80665 m/s^2`).
        standard_gravity => STANDARD_GRAVITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn standard_gravity_in_base_units() {
        assert_abs_diff_eq!(
            standard_gravity(1.0).base_value(),
            9.806_65,
            epsilon = 1e-12
        );
    }

    #[test]
    fn gravity_to_canonical() {
        let a = standard_gravity(2.0).convert_like(meters_per_second_squared(0.0));
        assert_abs_diff_eq!(a.value(), 19.6133, epsilon = 1e-9);
    }
}
