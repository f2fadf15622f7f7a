//! Integration-level smoke tests for the `unitsys` facade crate.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use unitsys::units::acceleration::standard_gravity;
use unitsys::units::amount::{moles, things};
use unitsys::units::area::{hectares, square_meters};
use unitsys::units::energy::{joules, kilowatt_hours, watt_hours};
use unitsys::units::force::{kilonewtons, newtons};
use unitsys::units::length::{kilometers, meters, millimeters};
use unitsys::units::mass::{kilograms, tonnes};
use unitsys::units::momentum::kilogram_meters_per_second;
use unitsys::units::power::{kilowatts, watts};
use unitsys::units::speed::{kilometers_per_hour, meters_per_second};
use unitsys::units::temperature::{celsius, kelvin};
use unitsys::units::time::{hours, minutes, seconds};
use unitsys::{abs, clamp, sqrt, square, unit_cast};

#[test]
fn smoke_test_conversion_roundtrip() {
    let d = meters(1234.5);
    let km = d.convert_like(kilometers(0.0));
    assert_abs_diff_eq!(km.value(), 1.2345, epsilon = 1e-12);
    assert_abs_diff_eq!(
        km.convert_like(meters(0.0)).value(),
        1234.5,
        epsilon = 1e-9
    );
}

#[test]
fn smoke_test_base_value_is_conversion_invariant() {
    let t = minutes(90.0);
    assert_abs_diff_eq!(t.base_value(), 5400.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        t.convert_like(hours(0.0)).base_value(),
        5400.0,
        epsilon = 1e-12
    );
}

#[test]
fn smoke_test_arithmetic_keeps_left_unit() {
    let d = kilometers(1.0) + meters(500.0) - millimeters(250_000.0);
    assert_abs_diff_eq!(d.value(), 1.25, epsilon = 1e-12);
    assert_eq!(d.multiplier(), 1000.0);
}

#[test]
fn smoke_test_scalar_arithmetic() {
    let t = seconds(30.0) * 4.0 / 2.0;
    assert_eq!(t, minutes(1.0));
    assert_eq!((0.5 * t).value(), 30.0);
}

#[test]
fn smoke_test_comparisons_across_units() {
    assert_eq!(tonnes(1.0), kilograms(1000.0));
    assert!(minutes(59.0) < hours(1.0));
    assert!(kilonewtons(1.0) >= newtons(1000.0));
}

#[test]
fn smoke_test_affine_temperature() {
    assert_eq!(celsius(0.0), kelvin(273.15));
    let warm = celsius(20.0) + celsius(5.0);
    assert_abs_diff_eq!(warm.value(), 25.0, epsilon = 1e-12);
    assert_abs_diff_eq!(warm.base_value(), 298.15, epsilon = 1e-12);
}

#[test]
fn smoke_test_kinematics_chain() {
    let v = kilometers(100.0) / hours(2.0);
    assert!(v.approx_eq(kilometers_per_hour(50.0)));

    let a = v / seconds(10.0);
    let f = kilograms(2.0) * a;
    assert_abs_diff_eq!(f.base_value(), 2.0 * 50.0 / 3.6 / 10.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_energy_and_power() {
    let e = watts(100.0) * hours(10.0);
    assert!(e.approx_eq(kilowatt_hours(1.0)));

    let p = watt_hours(1.0) / minutes(60.0);
    assert!(p.approx_eq(watts(1.0)));

    let lift = kilograms(10.0) * standard_gravity(1.0) * meters(2.0);
    assert_relative_eq!(lift.base_value(), 196.133, max_relative = 1e-9);
    assert!(lift.approx_eq(joules(196.133)));
}

#[test]
fn smoke_test_momentum() {
    let p = kilograms(3.0) * meters_per_second(4.0);
    assert!(p.approx_eq(kilogram_meters_per_second(12.0)));
    assert!((p / kilograms(3.0)).approx_eq(meters_per_second(4.0)));
}

#[test]
fn smoke_test_area_sqrt_square() {
    let a = square(meters(30.0));
    assert!(a.approx_eq(square_meters(900.0)));

    let side = sqrt(hectares(1.0));
    assert!(side.approx_eq(meters(100.0)));
    assert_abs_diff_eq!(side.multiplier(), 100.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_free_functions() {
    let d = unit_cast(kilometers(1.5), 1.0, 0.0);
    assert_abs_diff_eq!(d.value(), 1500.0, epsilon = 1e-9);

    assert_eq!(abs(meters(-3.0)), meters(3.0));
    assert_eq!(
        clamp(meters(5000.0), meters(0.0), kilometers(2.0)),
        kilometers(2.0)
    );
}

#[test]
fn smoke_test_amount_of_substance() {
    let n = moles(2.0);
    assert_relative_eq!(
        n.convert_like(things(0.0)).value(),
        2.0 * 6.022_140_76e23,
        max_relative = 1e-12
    );
}

#[test]
fn smoke_test_display_prints_base_unit() {
    assert_eq!(format!("{}", meters(5.0)), "5 m");
    assert_eq!(format!("{}", kilometers(1.5)), "1500 m");
    assert_eq!(format!("{}", seconds(42.0)), "42 s");
    assert_eq!(format!("{}", kilowatts(2.0)), "2000 W");
}

#[test]
fn smoke_test_duration_bridge() {
    use std::time::Duration;
    use unitsys::units::time::Time;

    let t: Time = Duration::from_secs(120).into();
    assert_eq!(t, minutes(2.0));

    let ms = Time::from_duration(Duration::from_millis(1500), 1e-3);
    assert_abs_diff_eq!(ms.value(), 1500.0, epsilon = 1e-9);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_unit_cast_roundtrip(v in -1e9..1e9f64, m in 1e-6..1e6f64) {
            let q = meters(v);
            let back = unit_cast(unit_cast(q, m, 0.0), 1.0, 0.0);
            prop_assert!((back.value() - v).abs() <= 1e-6 * v.abs().max(1.0));
        }

        #[test]
        fn prop_length_over_time_divides_back(d in 1e-3..1e6f64, t in 1e-3..1e6f64) {
            let v = meters(d) / seconds(t);
            prop_assert!((v * seconds(t)).approx_eq(meters(d)));
        }
    }
}

#[cfg(feature = "serde")]
mod serde_smoke {
    use super::*;
    use serde::{Deserialize, Serialize};
    use unitsys::units::length::Length;

    #[derive(Serialize, Deserialize)]
    struct Track {
        #[serde(with = "unitsys::serde_with_unit")]
        length: Length,
        altitude: Length,
    }

    #[test]
    fn smoke_test_serde_roundtrip() {
        let track = Track {
            length: kilometers(42.195),
            altitude: meters(12.0),
        };
        let json = serde_json::to_string(&track).unwrap();
        let back: Track = serde_json::from_str(&json).unwrap();

        assert_eq!(back.length.value(), 42.195);
        assert_eq!(back.length.multiplier(), 1000.0);
        assert_eq!(back.altitude, meters(12.0));
    }
}
