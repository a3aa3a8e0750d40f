//! Plane angle stored as radians.
//!
//! [`Angle`] is the primitive every coordinate component is built from. It is a
//! thin wrapper over an `f64` radian value: construction from degrees converts
//! once, and everything downstream (the folds in [`normalize`](super::normalize),
//! serialization, comparison) works in radians.
//!
//! ```
//! use celestial_geo::Angle;
//!
//! let a = Angle::from_degrees(45.0);
//! assert!((a.radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
//! assert!((a.degrees() - 45.0).abs() < 1e-12);
//! ```
//!
//! `Angle` only implements `PartialEq`/`PartialOrd`: a bare `f64` can be NaN.
//! [`Coordinate`](crate::Coordinate) restores a total order by refusing
//! non-finite components at construction.

use crate::constants::{HALF_PI, PI};

/// An angular measurement stored as radians.
///
/// With the `serde` feature it (de)serializes as the bare radian value.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi/2 radians (90 degrees). Latitude of the North Pole.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Pi radians (180 degrees). The antimeridian.
    pub const PI: Self = Self { rad: PI };

    /// Creates an angle from radians.
    ///
    /// This is the only `const` constructor because radians are the internal representation.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    ///
    /// ```
    /// use celestial_geo::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(90.0), Angle::HALF_PI);
    /// assert_eq!(Angle::from_degrees(180.0), Angle::PI);
    /// ```
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// `false` for NaN and both infinities.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }
}

/// Creates an angle from degrees. Shorthand for [`Angle::from_degrees`].
///
/// ```
/// use celestial_geo::angle::deg;
///
/// assert!((deg(-30.0).radians() + std::f64::consts::FRAC_PI_6).abs() < 1e-15);
/// ```
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}
