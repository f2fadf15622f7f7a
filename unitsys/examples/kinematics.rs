//! Free fall and braking distance, chaining cross-kind relations.

use unitsys::sqrt;
use unitsys::units::acceleration::standard_gravity;
use unitsys::units::energy::joules;
use unitsys::units::length::meters;
use unitsys::units::mass::kilograms;
use unitsys::units::speed::kilometers_per_hour;
use unitsys::units::time::seconds;

fn main() {
    // A 2 kg mass dropped for 3 seconds.
    let g = standard_gravity(1.0);
    let v = seconds(3.0) * g;
    println!("speed after 3 s of free fall: {v}");

    let p = kilograms(2.0) * v;
    println!("momentum at that point: {p}");

    // Kinetic energy via E = p * v / 2.
    let e = v * p / 2.0;
    println!("kinetic energy: {e}");
    assert!(e.approx_eq(joules(2.0 * 9.806_65 * 9.806_65 * 9.0 / 2.0)));

    // Braking from 100 km/h at 0.8 g: t = v / a, d = v * t / 2.
    let v0 = kilometers_per_hour(100.0);
    let a = standard_gravity(0.8);
    let t = v0 / a;
    let d = v0 * t / 2.0;
    println!("braking from {v0} takes {t} over {d}");
    assert!(t.approx_eq(seconds(100.0 / 3.6 / (0.8 * 9.806_65))));

    // Side of a square with the same area as the stopping corridor.
    let corridor = d * meters(3.5);
    let side = sqrt(corridor);
    println!("equivalent square side: {side}");
    assert!((side.square() / corridor - 1.0).abs() < 1e-9);
}
