//! Angles in degrees, the unit of every public routine.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An angle expressed in degrees.
///
/// Every public routine of [`crate::math`] takes its angles as `Degrees` and
/// converts to radians right before calling into trigonometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Degrees(pub f32);

impl Degrees {
    /// The zero angle.
    pub const ZERO: Degrees = Degrees(0.0);

    /// Builds an angle from a value in radians.
    #[inline]
    pub fn from_radians(radians: f32) -> Self {
        Degrees(radians.to_degrees())
    }

    /// The angle in radians.
    #[inline]
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }

    /// The raw value in degrees.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Degrees {
    #[inline]
    fn from(value: f32) -> Self {
        Degrees(value)
    }
}

impl Add for Degrees {
    type Output = Degrees;

    #[inline]
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;

    #[inline]
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Degrees;

    #[inline]
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
