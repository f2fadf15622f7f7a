//! Quantity type and its implementations.

use crate::kind::Kind;
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Relative tolerance carried by newly constructed quantities.
///
/// Used only by [`Quantity::approx_eq`]; the comparison operators stay exact.
pub const DEFAULT_REL_ERROR: f64 = 1e-6;

/// A physical quantity of kind `K`.
///
/// `Quantity<K>` stores a magnitude together with the unit it is expressed in.
/// The unit is described at runtime by two numbers:
///
/// - `multiplier` — scale factor to the kind's canonical (SI base) unit,
/// - `offset` — zero-point shift, in canonical units.
///
/// The canonical magnitude of a quantity is `value * multiplier + offset`.
/// Two quantities of the same kind always agree on what that canonical
/// magnitude means, so they can be converted, compared and combined freely
/// regardless of the unit each one happens to be expressed in.
///
/// Binary operations on same-kind quantities express their result in the
/// *left* operand's unit.
///
/// # Examples
///
/// ```rust
/// use unitsys_core::units::length::{kilometers, meters};
///
/// let d = kilometers(1.5) + meters(500.0);
/// assert_eq!(d.value(), 2.0); // result carries the km unit
/// assert_eq!(d.base_value(), 2000.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<K: Kind> {
    value: f64,
    multiplier: f64,
    offset: f64,
    rel_error: f64,
    _kind: PhantomData<K>,
}

#[inline]
const fn fabs(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

#[inline]
const fn fmax(a: f64, b: f64) -> f64 {
    if a > b {
        a
    } else {
        b
    }
}

impl<K: Kind> Quantity<K> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use unitsys_core::units::length::Length;
    /// assert!(Length::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a quantity in the canonical unit (multiplier 1, offset 0).
    ///
    /// ```rust
    /// use unitsys_core::units::time::Time;
    /// let t = Time::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// assert_eq!(t.multiplier(), 1.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::affine(value, 1.0, 0.0)
    }

    /// Creates a quantity in a scaled unit (offset 0).
    ///
    /// ```rust
    /// use unitsys_core::units::length::Length;
    /// let d = Length::scaled(3.0, 1000.0); // 3 km
    /// assert_eq!(d.base_value(), 3000.0);
    /// ```
    #[inline]
    pub const fn scaled(value: f64, multiplier: f64) -> Self {
        Self::affine(value, multiplier, 0.0)
    }

    /// Creates a quantity in an affine unit.
    ///
    /// ```rust
    /// use unitsys_core::units::temperature::Temperature;
    /// let t = Temperature::affine(20.0, 1.0, 273.15); // 20 °C
    /// assert_eq!(t.base_value(), 293.15);
    /// ```
    #[inline]
    pub const fn affine(value: f64, multiplier: f64, offset: f64) -> Self {
        Self {
            value,
            multiplier,
            offset,
            rel_error: DEFAULT_REL_ERROR,
            _kind: PhantomData,
        }
    }

    /// Returns the magnitude in this quantity's own unit.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Returns the scale factor to the canonical unit.
    #[inline]
    pub const fn multiplier(self) -> f64 {
        self.multiplier
    }

    /// Returns the zero-point shift, in canonical units.
    #[inline]
    pub const fn offset(self) -> f64 {
        self.offset
    }

    /// Returns the relative tolerance used by [`approx_eq`](Self::approx_eq).
    #[inline]
    pub const fn rel_error(self) -> f64 {
        self.rel_error
    }

    /// Returns the same quantity with an adjusted relative tolerance.
    #[inline]
    pub const fn with_rel_error(self, rel_error: f64) -> Self {
        Self { rel_error, ..self }
    }

    /// Returns the magnitude expressed in the canonical unit.
    ///
    /// ```rust
    /// use unitsys_core::units::time::hours;
    /// assert_eq!(hours(2.0).base_value(), 7200.0);
    /// ```
    #[inline]
    pub const fn base_value(self) -> f64 {
        self.value * self.multiplier + self.offset
    }

    /// Re-expresses this quantity in the unit described by `multiplier` and
    /// `offset`. The canonical magnitude is unchanged.
    ///
    /// A zero `multiplier` follows IEEE-754: the result is infinite or NaN,
    /// never a panic.
    ///
    /// ```rust
    /// use unitsys_core::units::temperature::celsius;
    ///
    /// let t = celsius(20.0);
    /// let k = t.convert_copy(1.0, 0.0);
    /// assert!((k.value() - 293.15).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn convert_copy(self, multiplier: f64, offset: f64) -> Self {
        let value = (self.value * self.multiplier + self.offset - offset) / multiplier;
        Self {
            value,
            multiplier,
            offset,
            ..self
        }
    }

    /// Re-expresses this quantity with a new multiplier, keeping the offset.
    ///
    /// ```rust
    /// use unitsys_core::units::length::kilometers;
    /// let m = kilometers(1.0).convert_multiplier(1.0);
    /// assert_eq!(m.value(), 1000.0);
    /// ```
    #[inline]
    pub const fn convert_multiplier(self, multiplier: f64) -> Self {
        self.convert_copy(multiplier, self.offset)
    }

    /// Re-expresses this quantity with a new offset, keeping the multiplier.
    #[inline]
    pub const fn convert_offset(self, offset: f64) -> Self {
        self.convert_copy(self.multiplier, offset)
    }

    /// Re-expresses this quantity in the unit of `other`.
    ///
    /// ```rust
    /// use unitsys_core::units::time::{minutes, seconds};
    /// let t = seconds(90.0).convert_like(minutes(0.0));
    /// assert_eq!(t.value(), 1.5);
    /// ```
    #[inline]
    pub const fn convert_like(self, other: Self) -> Self {
        self.convert_copy(other.multiplier, other.offset)
    }

    /// Overwrites the magnitude with `other`, keeping this quantity's unit.
    ///
    /// This is the unit-preserving assignment: `other` is re-expressed in the
    /// receiver's unit and only the magnitude is stored.
    ///
    /// ```rust
    /// use unitsys_core::units::length::{kilometers, meters};
    /// let mut d = kilometers(1.0);
    /// d.assign(meters(250.0));
    /// assert_eq!(d.value(), 0.25);
    /// assert_eq!(d.multiplier(), 1000.0);
    /// ```
    #[inline]
    pub fn assign(&mut self, other: Self) {
        self.value = other.convert_like(*self).value;
    }

    /// Approximate equality within the stored relative tolerances.
    ///
    /// `other` is re-expressed in this quantity's unit, then the magnitudes
    /// are compared against `max(rel_errors) * max(|a|, |b|, 1.0)`. The `==`
    /// operator stays exact; use this when comparing computed results.
    ///
    /// ```rust
    /// use unitsys_core::units::length::meters;
    /// let a = meters(1.0);
    /// let b = meters(1.0 + 1e-9);
    /// assert!(a != b);
    /// assert!(a.approx_eq(b));
    /// ```
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        let rhs = other.convert_like(self);
        let tol = fmax(self.rel_error, rhs.rel_error)
            * fmax(fmax(fabs(self.value), fabs(rhs.value)), 1.0);
        fabs(self.value - rhs.value) <= tol
    }

    /// Returns the absolute value, unit preserved.
    ///
    /// ```rust
    /// use unitsys_core::units::length::meters;
    /// assert_eq!(meters(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub const fn abs(self) -> Self {
        if self.value >= -self.value {
            self
        } else {
            Self {
                value: -self.value,
                ..self
            }
        }
    }

    /// Clamps this quantity between `lower` and `upper`.
    ///
    /// The bounds are re-expressed in this quantity's unit first, so the
    /// result keeps this quantity's unit.
    ///
    /// ```rust
    /// use unitsys_core::units::length::{kilometers, meters};
    /// let d = meters(2500.0).clamp(meters(0.0), kilometers(2.0));
    /// assert_eq!(d.value(), 2000.0);
    /// ```
    #[inline]
    pub fn clamp(self, lower: Self, upper: Self) -> Self {
        let lo = lower.convert_like(self);
        let hi = upper.convert_like(self);
        if self.value < lo.value {
            lo
        } else if self.value > hi.value {
            hi
        } else {
            self
        }
    }

    /// Returns the smaller of this quantity and `other`, in this unit.
    ///
    /// ```rust
    /// use unitsys_core::units::length::{kilometers, meters};
    /// assert_eq!(meters(500.0).min(kilometers(1.0)).value(), 500.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        let rhs = other.convert_like(self);
        if rhs.value < self.value {
            rhs
        } else {
            self
        }
    }

    /// Returns the larger of this quantity and `other`, in this unit.
    ///
    /// ```rust
    /// use unitsys_core::units::length::{kilometers, meters};
    /// assert_eq!(meters(500.0).max(kilometers(1.0)).value(), 1000.0);
    /// ```
    #[inline]
    pub fn max(self, other: Self) -> Self {
        let rhs = other.convert_like(self);
        if rhs.value > self.value {
            rhs
        } else {
            self
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free functions
// ─────────────────────────────────────────────────────────────────────────────

/// Re-expresses `q` in the unit described by `multiplier` and `offset`.
///
/// Free-function form of [`Quantity::convert_copy`].
#[inline]
pub const fn unit_cast<K: Kind>(q: Quantity<K>, multiplier: f64, offset: f64) -> Quantity<K> {
    q.convert_copy(multiplier, offset)
}

/// Clamps `q` between `lower` and `upper`; the result keeps `q`'s unit.
#[inline]
pub fn clamp<K: Kind>(q: Quantity<K>, lower: Quantity<K>, upper: Quantity<K>) -> Quantity<K> {
    q.clamp(lower, upper)
}

/// Returns the absolute value of `q`, unit preserved.
#[inline]
pub const fn abs<K: Kind>(q: Quantity<K>) -> Quantity<K> {
    q.abs()
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Add for Quantity<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let rhs = rhs.convert_like(self);
        Self {
            value: self.value + rhs.value,
            ..self
        }
    }
}

impl<K: Kind> AddAssign for Quantity<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.convert_like(*self).value;
    }
}

impl<K: Kind> Sub for Quantity<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let rhs = rhs.convert_like(self);
        Self {
            value: self.value - rhs.value,
            ..self
        }
    }
}

impl<K: Kind> SubAssign for Quantity<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.convert_like(*self).value;
    }
}

impl<K: Kind> Mul<f64> for Quantity<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            value: self.value * rhs,
            ..self
        }
    }
}

impl<K: Kind> Mul<Quantity<K>> for f64 {
    type Output = Quantity<K>;
    #[inline]
    fn mul(self, rhs: Quantity<K>) -> Self::Output {
        rhs * self
    }
}

impl<K: Kind> MulAssign<f64> for Quantity<K> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl<K: Kind> Div<f64> for Quantity<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self {
            value: self.value / rhs,
            ..self
        }
    }
}

impl<K: Kind> DivAssign<f64> for Quantity<K> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}

/// Dividing same-kind quantities yields the dimensionless ratio, with the
/// right operand re-expressed in the left operand's unit first.
impl<K: Kind> Div for Quantity<K> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.value / rhs.convert_like(self).value
    }
}

impl<K: Kind> Neg for Quantity<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            value: -self.value,
            ..self
        }
    }
}

impl<K: Kind> PartialEq for Quantity<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.convert_like(*self).value
    }
}

impl<K: Kind> PartialOrd for Quantity<K> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.convert_like(*self).value)
    }
}

impl<K: Kind> From<Quantity<K>> for f64 {
    /// Extracts the canonical magnitude.
    #[inline]
    fn from(q: Quantity<K>) -> f64 {
        q.base_value()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<K: Kind> Serialize for Quantity<K> {
    /// Serializes as the bare canonical magnitude (compact default).
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.base_value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Kind> Deserialize<'de> for Quantity<K> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module preserving the unit in serialized data.
///
/// The default serde impls serialize a quantity as its bare canonical
/// magnitude. Use this module with `#[serde(with = "...")]` when the unit
/// itself must survive the round trip, for configuration files or
/// self-documenting data formats.
///
/// # Examples
///
/// ```rust
/// use unitsys_core::units::length::Length;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "unitsys_core::serde_with_unit")]
///     max_distance: Length, // {"value": 2.0, "multiplier": 1000.0, "offset": 0.0}
///
///     min_distance: Length, // 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<K>` as a struct with `value`, `multiplier` and
    /// `offset` fields.
    pub fn serialize<K, S>(quantity: &Quantity<K>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Kind,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 3)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("multiplier", &quantity.multiplier())?;
        state.serialize_field("offset", &quantity.offset())?;
        state.end()
    }

    /// Deserializes a `Quantity<K>` from a struct with a `value` field and
    /// optional `multiplier` (default 1) and `offset` (default 0) fields.
    pub fn deserialize<'de, K, D>(deserializer: D) -> Result<Quantity<K>, D::Error>
    where
        K: Kind,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Multiplier,
            Offset,
        }

        struct QuantityVisitor<K>(core::marker::PhantomData<K>);

        impl<'de, K: Kind> Visitor<'de> for QuantityVisitor<K> {
            type Value = Quantity<K>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value, multiplier and offset fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<K>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut multiplier: Option<f64> = None;
                let mut offset: Option<f64> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Multiplier => {
                            if multiplier.is_some() {
                                return Err(de::Error::duplicate_field("multiplier"));
                            }
                            multiplier = Some(map.next_value()?);
                        }
                        Field::Offset => {
                            if offset.is_some() {
                                return Err(de::Error::duplicate_field("offset"));
                            }
                            offset = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let multiplier = multiplier.unwrap_or(1.0);
                let offset = offset.unwrap_or(0.0);

                Ok(Quantity::affine(value, multiplier, offset))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "multiplier", "offset"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}
