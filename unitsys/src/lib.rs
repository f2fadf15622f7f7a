//! Runtime-checked physical quantities and conversions.
//!
//! `unitsys` is the user-facing facade over [`unitsys_core`]: it re-exports
//! the quantity model, the predefined kinds and the `#[derive(Kind)]` macro
//! from one place.
//!
//! A quantity couples a magnitude with the unit it is expressed in, described
//! at runtime by a multiplier and an offset relative to the kind's canonical
//! SI unit. Kinds are zero-sized type markers, so adding a time to a length
//! is a compile error, while adding kilometers to meters just converts.
//!
//! # Quick start
//!
//! ```rust
//! use unitsys::units::length::{kilometers, meters};
//! use unitsys::units::speed::kilometers_per_hour;
//! use unitsys::units::temperature::{celsius, kelvin};
//! use unitsys::units::time::hours;
//!
//! // Same-kind arithmetic keeps the left operand's unit.
//! let leg = kilometers(1.2) + meters(300.0);
//! assert_eq!(leg.value(), 1.5);
//!
//! // Affine units convert through the canonical zero point.
//! assert_eq!(celsius(0.0), kelvin(273.15));
//!
//! // Declared cross-kind relations produce the right kind.
//! let distance = hours(2.0) * kilometers_per_hour(60.0);
//! assert!(distance.approx_eq(kilometers(120.0)));
//! ```
//!
//! # Crates
//!
//! - [`unitsys_core`] — quantity model, conversion engine, operators,
//!   cross-kind relations, predefined kinds.
//! - `unitsys-derive` — the `#[derive(Kind)]` macro (re-exported here).
//!
//! # Features
//!
//! - `std` (default): `std::time::Duration` bridge and std float math;
//!   disable for `no_std` targets (math falls back to `libm`).
//! - `serde`: serialization for quantities, compact by default, unit-tagged
//!   through `serde_with_unit`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use unitsys_core::*;

pub use unitsys_derive::Kind;
