//! Predefined quantity kinds grouped by module.
//!
//! Each module declares a kind marker (for example [`time::TimeKind`]), the
//! quantity alias (for example [`time::Time`]) and `const fn` unit
//! constructors for the units commonly used with that kind.

pub mod acceleration;
pub mod amount;
pub mod area;
pub mod electric_current;
pub mod energy;
pub mod force;
pub mod length;
pub mod luminous_intensity;
pub mod mass;
pub mod momentum;
pub mod power;
pub mod speed;
pub mod temperature;
pub mod time;
