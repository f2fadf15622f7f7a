//! Cross-kind relations between quantities.
//!
//! Physically meaningful products and quotients of different kinds are
//! declared here, one row per relation. Each row expands to a `Mul` or `Div`
//! impl that:
//!
//! 1. normalizes both operands to a zero offset,
//! 2. combines the magnitudes with the operator,
//! 3. combines the multipliers with the *same* operator.
//!
//! So `hours(1.0) * kilometers_per_hour(36.0)` carries a multiplier of
//! `3600 * (1/3.6) = 1000` and reads back as 36 kilometers.

use crate::quantity::Quantity;
use crate::units::acceleration::AccelerationKind;
use crate::units::area::AreaKind;
use crate::units::energy::EnergyKind;
use crate::units::force::ForceKind;
use crate::units::length::LengthKind;
use crate::units::mass::MassKind;
use crate::units::momentum::MomentumKind;
use crate::units::power::PowerKind;
use crate::units::speed::SpeedKind;
use crate::units::time::TimeKind;
use core::ops::{Div, Mul};

macro_rules! relation {
    ($a:ident * $b:ident => $out:ident) => {
        impl Mul<Quantity<$b>> for Quantity<$a> {
            type Output = Quantity<$out>;
            #[inline]
            fn mul(self, rhs: Quantity<$b>) -> Self::Output {
                let rel = if self.rel_error() > rhs.rel_error() {
                    self.rel_error()
                } else {
                    rhs.rel_error()
                };
                let a = self.convert_offset(0.0);
                let b = rhs.convert_offset(0.0);
                Quantity::scaled(a.value() * b.value(), a.multiplier() * b.multiplier())
                    .with_rel_error(rel)
            }
        }
    };
    ($a:ident / $b:ident => $out:ident) => {
        impl Div<Quantity<$b>> for Quantity<$a> {
            type Output = Quantity<$out>;
            #[inline]
            fn div(self, rhs: Quantity<$b>) -> Self::Output {
                let rel = if self.rel_error() > rhs.rel_error() {
                    self.rel_error()
                } else {
                    rhs.rel_error()
                };
                let a = self.convert_offset(0.0);
                let b = rhs.convert_offset(0.0);
                Quantity::scaled(a.value() / b.value(), a.multiplier() / b.multiplier())
                    .with_rel_error(rel)
            }
        }
    };
}

macro_rules! relations {
    ($($a:ident $op:tt $b:ident => $out:ident;)+) => {
        $(relation!($a $op $b => $out);)+
    };
}

relations! {
    // Products (each pair declared in both orders).
    TimeKind         * SpeedKind        => LengthKind;
    SpeedKind        * TimeKind         => LengthKind;
    TimeKind         * AccelerationKind => SpeedKind;
    AccelerationKind * TimeKind         => SpeedKind;
    TimeKind         * PowerKind        => EnergyKind;
    PowerKind        * TimeKind         => EnergyKind;
    TimeKind         * ForceKind        => MomentumKind;
    ForceKind        * TimeKind         => MomentumKind;
    LengthKind       * LengthKind       => AreaKind;
    LengthKind       * ForceKind        => EnergyKind;
    ForceKind        * LengthKind       => EnergyKind;
    MassKind         * AccelerationKind => ForceKind;
    AccelerationKind * MassKind         => ForceKind;
    MassKind         * SpeedKind        => MomentumKind;
    SpeedKind        * MassKind         => MomentumKind;
    SpeedKind        * MomentumKind     => EnergyKind;
    MomentumKind     * SpeedKind        => EnergyKind;
    SpeedKind        * ForceKind        => PowerKind;
    ForceKind        * SpeedKind        => PowerKind;

    // Quotients.
    LengthKind       / SpeedKind        => TimeKind;
    LengthKind       / TimeKind         => SpeedKind;
    EnergyKind       / ForceKind        => LengthKind;
    EnergyKind       / LengthKind       => ForceKind;
    EnergyKind       / PowerKind        => TimeKind;
    EnergyKind       / TimeKind         => PowerKind;
    EnergyKind       / MomentumKind     => SpeedKind;
    EnergyKind       / SpeedKind        => MomentumKind;
    PowerKind        / ForceKind        => SpeedKind;
    PowerKind        / SpeedKind        => ForceKind;
    SpeedKind        / AccelerationKind => TimeKind;
    SpeedKind        / TimeKind         => AccelerationKind;
    AreaKind         / LengthKind       => LengthKind;
    ForceKind        / MassKind         => AccelerationKind;
    ForceKind        / AccelerationKind => MassKind;
    MomentumKind     / ForceKind        => TimeKind;
    MomentumKind     / TimeKind         => ForceKind;
    MomentumKind     / MassKind         => SpeedKind;
    MomentumKind     / SpeedKind        => MassKind;
}

// ─────────────────────────────────────────────────────────────────────────────
// Square root and square
// ─────────────────────────────────────────────────────────────────────────────

impl Quantity<AreaKind> {
    /// Returns the side length of a square with this area.
    ///
    /// Both the magnitude and the multiplier take the square root, so the
    /// result stays in the matching length unit (square kilometers become
    /// kilometers).
    ///
    /// ```rust
    /// use unitsys_core::units::area::square_meters;
    /// let side = square_meters(25.0).sqrt();
    /// assert_eq!(side.value(), 5.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<LengthKind> {
        #[cfg(feature = "std")]
        let (value, multiplier) = (self.value().sqrt(), self.multiplier().sqrt());
        #[cfg(not(feature = "std"))]
        let (value, multiplier) = (libm::sqrt(self.value()), libm::sqrt(self.multiplier()));
        Quantity::affine(value, multiplier, self.offset()).with_rel_error(self.rel_error())
    }
}

impl Quantity<LengthKind> {
    /// Returns the area of a square with this side length.
    ///
    /// ```rust
    /// use unitsys_core::units::length::meters;
    /// assert_eq!(meters(5.0).square().base_value(), 25.0);
    /// ```
    #[inline]
    pub fn square(self) -> Quantity<AreaKind> {
        self * self
    }
}

/// Returns the side length of a square with area `q`.
#[inline]
pub fn sqrt(q: Quantity<AreaKind>) -> Quantity<LengthKind> {
    q.sqrt()
}

/// Returns the area of a square with side length `q`.
#[inline]
pub fn square(q: Quantity<LengthKind>) -> Quantity<AreaKind> {
    q.square()
}
