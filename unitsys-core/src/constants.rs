//! Physical constants used by the predefined kinds.

/// The Avogadro constant, in things per mole (2019 SI exact value).
pub const AVOGADRO_CONSTANT: f64 = 6.022_140_76e23;

/// Freezing point of water at standard pressure, in kelvin.
pub const WATER_FREEZING_POINT: f64 = 273.15;

/// Standard gravitational acceleration, in meters per second squared.
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Elementary charge, in coulombs; joules per electron volt.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
