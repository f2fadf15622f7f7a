//! Runtime-checked physical quantities.
//!
//! `unitsys-core` models a quantity as a magnitude plus the unit it is
//! expressed in, where the unit is a `(multiplier, offset)` pair relative to
//! the kind's canonical SI unit. Kinds (time, length, energy, ...) are
//! distinguished at the type level by zero-sized markers, so mixing kinds is
//! a compile error while mixing *units* of one kind just converts.
//!
//! # Quick start
//!
//! ```rust
//! use unitsys_core::units::length::{kilometers, meters};
//! use unitsys_core::units::speed::kilometers_per_hour;
//! use unitsys_core::units::time::{hours, seconds};
//!
//! // Same-kind arithmetic converts the right operand into the left unit.
//! let leg = kilometers(1.2) + meters(300.0);
//! assert_eq!(leg.value(), 1.5);
//!
//! // Declared cross-kind relations produce the right kind.
//! let distance = hours(2.0) * kilometers_per_hour(60.0);
//! assert!(distance.approx_eq(kilometers(120.0)));
//!
//! // Comparisons work across units of the same kind.
//! assert!(seconds(90.0) > hours(0.02));
//! ```
//!
//! # Features
//!
//! - `std` (default): enables the `std::time::Duration` bridge and
//!   std float math. Without it the crate is `no_std` and uses `libm`.
//! - `serde`: `Serialize`/`Deserialize` for quantities, plus the
//!   [`serde_with_unit`] helper that keeps the unit in the output.
//!
//! # Panics and errors
//!
//! Nothing here panics and there is no error type. All arithmetic follows
//! IEEE-754: converting with a zero multiplier, or dividing by a zero
//! quantity, yields infinities or NaN that propagate through later
//! operations.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod constants;
mod kind;
mod macros;
mod quantity;
mod relations;
pub mod units;

pub use kind::Kind;
pub use quantity::{abs, clamp, unit_cast, Quantity, DEFAULT_REL_ERROR};
pub use relations::{sqrt, square};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;
