//! Working with affine units: Celsius and Kelvin.

use unitsys::clamp;
use unitsys::units::temperature::{celsius, kelvin};

fn main() {
    let body = celsius(36.6);
    println!("body temperature: {body}"); // printed in kelvin

    // Conversion through the canonical zero point.
    let in_kelvin = body.convert_like(kelvin(0.0));
    assert!((in_kelvin.value() - 309.75).abs() < 1e-9);

    // Comparisons and arithmetic work across the offset.
    assert!(body > kelvin(300.0));
    let fever = body + celsius(1.5);
    println!("with a fever: {} degrees Celsius", fever.value());

    // Keep a thermostat setting inside a sane band, whatever unit it uses.
    let setting = clamp(kelvin(350.0), celsius(5.0), celsius(30.0));
    assert_eq!(setting, celsius(30.0));
    println!("thermostat clamped to {setting}");
}
