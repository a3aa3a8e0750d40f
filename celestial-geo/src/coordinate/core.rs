//! Canonical geographic coordinate.
//!
//! A [`Coordinate`] is a (latitude, longitude) pair that has been through
//! [`canonicalize`](super::canonicalize). The fields are private and every
//! constructor runs the fold, so a live value always satisfies:
//!
//! - **Latitude**: North positive, range [-90°, +90°]
//! - **Longitude**: East positive, range (-180°, +180°]
//! - both components finite
//!
//! Raw inputs are never rejected for being out of range. They are folded:
//!
//! ```
//! use celestial_geo::Coordinate;
//!
//! // 10° past the North Pole
//! let c = Coordinate::from_degrees(100.0, 10.0)?;
//! assert!((c.latitude_degrees() - 80.0).abs() < 1e-12);
//! assert!((c.longitude_degrees() + 170.0).abs() < 1e-12);
//! # Ok::<(), celestial_geo::GeoError>(())
//! ```
//!
//! # Ordering
//!
//! Coordinates sort west to east, then south to north: longitude is the
//! primary key and latitude breaks ties. Because both components are finite,
//! the order is total and `Coordinate` implements `Eq`, `Ord` and `Hash`, so it
//! can key a `BTreeMap` or `HashMap` directly.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::canonical::{canonicalize, fold_pair};
use crate::angle::Angle;
use crate::constants::HALF_PI;
use crate::errors::GeoResult;

/// A point on the sphere, held in canonical form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "super::CoordinateRecord", try_from = "super::CoordinateRecord")
)]
pub struct Coordinate {
    latitude: Angle,
    longitude: Angle,
}

impl Coordinate {
    /// Creates a coordinate from raw angles, folding them into canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidArgument`](crate::GeoError::InvalidArgument)
    /// if either angle is NaN or infinite.
    pub fn new(latitude: Angle, longitude: Angle) -> GeoResult<Self> {
        let (latitude, longitude) = canonicalize(latitude, longitude)?;
        Ok(Self::from_canonical(latitude, longitude))
    }

    pub fn from_radians(lat_rad: f64, lon_rad: f64) -> GeoResult<Self> {
        Self::new(Angle::from_radians(lat_rad), Angle::from_radians(lon_rad))
    }

    /// Creates a coordinate from degrees, the form most sources provide.
    ///
    /// ```
    /// use celestial_geo::Coordinate;
    ///
    /// // Longitude -180° is stored as +180°
    /// let c = Coordinate::from_degrees(0.0, -180.0)?;
    /// assert_eq!(c.longitude_degrees(), 180.0);
    /// # Ok::<(), celestial_geo::GeoError>(())
    /// ```
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> GeoResult<Self> {
        Self::new(Angle::from_degrees(lat_deg), Angle::from_degrees(lon_deg))
    }

    /// Wraps a pair the caller has already proven canonical.
    #[inline]
    pub(crate) const fn from_canonical(latitude: Angle, longitude: Angle) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// (0°, 0°), where the equator meets the prime meridian.
    pub const fn origin() -> Self {
        Self::from_canonical(Angle::ZERO, Angle::ZERO)
    }

    pub const fn north_pole() -> Self {
        Self::from_canonical(Angle::HALF_PI, Angle::ZERO)
    }

    pub const fn south_pole() -> Self {
        Self::from_canonical(Angle::from_radians(-HALF_PI), Angle::ZERO)
    }

    #[inline]
    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.degrees()
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.degrees()
    }

    /// Returns a new coordinate with the latitude replaced and the pair re-folded.
    ///
    /// A latitude past a pole moves the result to the opposite meridian, so the
    /// longitude of the result may differ from `self.longitude()`.
    pub fn with_latitude(&self, latitude: Angle) -> GeoResult<Self> {
        Self::new(latitude, self.longitude)
    }

    /// Returns a new coordinate with the longitude replaced and re-folded.
    pub fn with_longitude(&self, longitude: Angle) -> GeoResult<Self> {
        Self::new(self.latitude, longitude)
    }

    /// The diametrically opposite point: latitude negated, longitude shifted by 180°.
    ///
    /// ```
    /// use celestial_geo::Coordinate;
    ///
    /// let a = Coordinate::from_degrees(45.0, -170.0)?.antipode();
    /// assert!((a.latitude_degrees() + 45.0).abs() < 1e-12);
    /// assert!((a.longitude_degrees() - 10.0).abs() < 1e-12);
    /// # Ok::<(), celestial_geo::GeoError>(())
    /// ```
    pub fn antipode(&self) -> Self {
        let (latitude, longitude) = fold_pair(
            (-self.latitude).radians(),
            (self.longitude + Angle::PI).radians(),
        );
        Self::from_canonical(latitude, longitude)
    }
}

// Both components are finite, so `==` on them is an equivalence relation.
impl Eq for Coordinate {}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        let by = |a: Angle, b: Angle| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        by(self.longitude, other.longitude)
            .then_with(|| by(self.latitude, other.latitude))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0 but their bits differ; adding +0.0 folds the sign away.
        (self.latitude.radians() + 0.0).to_bits().hash(state);
        (self.longitude.radians() + 0.0).to_bits().hash(state);
    }
}
