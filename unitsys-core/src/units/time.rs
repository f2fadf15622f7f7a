//! Time quantities.
//!
//! The canonical unit is the SI second. Civil units use the conventional
//! mappings `1 day = 86_400 s` and `1 year = 365 d = 31_536_000 s` (leap
//! seconds and leap years ignored).
//!
//! ```rust
//! use unitsys_core::units::time::{hours, minutes, seconds};
//!
//! let t = hours(0.5);
//! assert_eq!(t.base_value(), 1800.0);
//! assert_eq!(t, minutes(30.0));
//! assert_eq!(t.convert_like(seconds(0.0)).value(), 1800.0);
//! ```

use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for time.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "s")]
pub enum TimeKind {}

/// A time quantity.
pub type Time = Quantity<TimeKind>;

crate::unit_constructors! {
    Time {
        /// Attoseconds (`1 as = 10^-18 s`).
        attoseconds => 1e-18,
        /// Femtoseconds (`1 fs = 10^-15 s`).
        femtoseconds => 1e-15,
        /// Picoseconds (`1 ps = 10^-12 s`).
        picoseconds => 1e-12,
        /// Nanoseconds (`1 ns = 10^-9 s`).
        nanoseconds => 1e-9,
        /// Microseconds (`1 µs = 10^-6 s`).
        microseconds => 1e-6,
        /// Milliseconds (`1 ms = 10^-3 s`).
        milliseconds => 1e-3,
        /// Seconds (SI base unit).
        seconds => 1.0,
        /// Minutes (`60 s`).
        minutes => 60.0,
        /// Hours (`3_600 s`).
        hours => 3_600.0,
        /// Mean solar days (`86_400 s`; leap seconds ignored).
        days => 86_400.0,
        /// Conventional years (`365 d = 31_536_000 s`).
        years => 31_536_000.0,
    }
}

#[cfg(feature = "std")]
impl From<std::time::Duration> for Time {
    /// Converts a `Duration` into a time quantity in seconds.
    #[inline]
    fn from(d: std::time::Duration) -> Self {
        Time::new(d.as_secs_f64())
    }
}

#[cfg(feature = "std")]
impl Time {
    /// Builds a time quantity from a `Duration`, expressed in the unit with
    /// the given multiplier.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use unitsys_core::units::time::Time;
    ///
    /// let t = Time::from_duration(Duration::from_millis(1500), 1e-3);
    /// assert_eq!(t.value(), 1500.0);
    /// assert_eq!(t.multiplier(), 1e-3);
    /// ```
    #[inline]
    pub fn from_duration(d: std::time::Duration, multiplier: f64) -> Self {
        Time::new(d.as_secs_f64()).convert_multiplier(multiplier)
    }
}
