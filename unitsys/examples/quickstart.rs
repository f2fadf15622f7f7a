//! Minimal end-to-end example: converting, comparing and combining quantities.

use unitsys::units::length::{kilometers, meters};
use unitsys::units::speed::kilometers_per_hour;
use unitsys::units::time::{hours, minutes};

fn main() {
    // Same-kind arithmetic converts the right operand into the left unit.
    let commute = kilometers(12.5) + meters(800.0);
    println!("commute: {commute}"); // printed in the canonical unit

    // Comparisons work across units of the same kind.
    assert!(minutes(50.0) < hours(1.0));

    // Cross-kind relations produce the right kind of quantity.
    let pace = commute / hours(0.5);
    println!("average speed: {pace}");
    assert!(pace.approx_eq(kilometers_per_hour(26.6)));
}
