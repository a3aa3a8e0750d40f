//! Persisted form of a [`Coordinate`].
//!
//! The record holds the two canonical components in radians, never degrees and
//! never the raw pre-fold input, so reloading cannot drift through a unit
//! conversion. With the `serde` feature it reads and writes as
//!
//! ```json
//! { "latitudeRadians": 1.3962634015954638, "longitudeRadians": -2.9670597283903604 }
//! ```
//!
//! and `Coordinate` itself (de)serializes through it.
//!
//! # Reload policy
//!
//! A record from outside may not be canonical. [`RecordPolicy`] decides what
//! happens then:
//!
//! | Record | `Repair` (default) | `Strict` |
//! |--------|--------------------|----------|
//! | canonical | taken bit for bit, no fold | same |
//! | finite, out of range | folded, `warn!` logged | `OutOfRange` error |
//! | NaN / infinite | `NotFinite` error | same |
//!
//! Serde deserialization always uses the default policy.

use tracing::warn;

use super::core::Coordinate;
use crate::angle::Angle;
use crate::constants::{HALF_PI, PI};
use crate::errors::{ArgumentErrorKind, GeoError, GeoResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two canonical components of a coordinate, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", deny_unknown_fields)
)]
pub struct CoordinateRecord {
    pub latitude_radians: f64,
    pub longitude_radians: f64,
}

/// How [`Coordinate::from_record`] treats a record outside the canonical range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordPolicy {
    /// Fold out-of-range values into canonical form and log a warning.
    #[default]
    Repair,
    /// Reject out-of-range values.
    Strict,
}

impl Coordinate {
    pub fn to_record(&self) -> CoordinateRecord {
        CoordinateRecord {
            latitude_radians: self.latitude().radians(),
            longitude_radians: self.longitude().radians(),
        }
    }

    /// Rebuilds a coordinate from its persisted form.
    ///
    /// Canonical records are trusted as-is, so `from_record(c.to_record(), _)`
    /// returns a value bit-identical to `c`.
    ///
    /// # Errors
    ///
    /// - [`ArgumentErrorKind::NotFinite`] for NaN or infinite components.
    /// - [`ArgumentErrorKind::OutOfRange`] under [`RecordPolicy::Strict`] when
    ///   the record is not canonical.
    pub fn from_record(record: CoordinateRecord, policy: RecordPolicy) -> GeoResult<Self> {
        let CoordinateRecord {
            latitude_radians: lat,
            longitude_radians: lon,
        } = record;

        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::invalid_argument(
                "from_record",
                ArgumentErrorKind::NotFinite,
                &format!("record ({}, {}) has a non-finite component", lat, lon),
            ));
        }

        if is_canonical(lat, lon) {
            return Ok(Self::from_canonical(
                Angle::from_radians(lat),
                Angle::from_radians(lon),
            ));
        }

        match policy {
            RecordPolicy::Strict => Err(GeoError::invalid_argument(
                "from_record",
                ArgumentErrorKind::OutOfRange,
                &format!(
                    "record ({}, {}) outside lat [-pi/2, pi/2], lon (-pi, pi]",
                    lat, lon
                ),
            )),
            RecordPolicy::Repair => {
                let repaired = Self::from_radians(lat, lon)?;
                warn!(
                    latitude_radians = lat,
                    longitude_radians = lon,
                    %repaired,
                    "non-canonical coordinate record folded on reload"
                );
                Ok(repaired)
            }
        }
    }
}

fn is_canonical(lat: f64, lon: f64) -> bool {
    (-HALF_PI..=HALF_PI).contains(&lat) && lon > -PI && lon <= PI
}

impl From<Coordinate> for CoordinateRecord {
    fn from(c: Coordinate) -> Self {
        c.to_record()
    }
}

impl TryFrom<CoordinateRecord> for Coordinate {
    type Error = GeoError;

    fn try_from(record: CoordinateRecord) -> GeoResult<Self> {
        Coordinate::from_record(record, RecordPolicy::default())
    }
}
