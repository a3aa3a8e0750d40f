//! The canonicalizer: any finite (latitude, longitude) pair to its canonical form.
//!
//! Canonical means `-90° <= latitude <= +90°` and `-180° < longitude <= +180°`.
//! The fold runs in three steps:
//!
//! 1. Latitude is reduced as if walking along a meridian ([`fold_latitude`]).
//!    Overshooting a pole lands on the opposite meridian.
//! 2. On a pole crossing the longitude is shifted by pi.
//! 3. Longitude is reduced to (-pi, +pi] ([`wrap_pm_pi_upper`]).
//!
//! ```
//! use celestial_geo::{canonicalize, Angle};
//!
//! let (lat, lon) = canonicalize(Angle::from_degrees(100.0), Angle::from_degrees(10.0))?;
//! assert!((lat.degrees() - 80.0).abs() < 1e-12);
//! assert!((lon.degrees() + 170.0).abs() < 1e-12);
//! # Ok::<(), celestial_geo::GeoError>(())
//! ```

use tracing::trace;

use crate::angle::{fold_latitude, wrap_pm_pi_upper, Angle};
use crate::constants::PI;
use crate::errors::{ArgumentErrorKind, GeoError, GeoResult};

/// Folds a raw angle pair into the canonical range.
///
/// Total over finite input. Idempotent: feeding the output back in returns it
/// unchanged, bit for bit.
///
/// # Errors
///
/// [`GeoError::InvalidArgument`] with [`ArgumentErrorKind::NotFinite`] if either
/// component is NaN or infinite. The fold itself would propagate NaN silently.
pub fn canonicalize(latitude: Angle, longitude: Angle) -> GeoResult<(Angle, Angle)> {
    ensure_finite(latitude, "latitude")?;
    ensure_finite(longitude, "longitude")?;
    Ok(fold_pair(latitude.radians(), longitude.radians()))
}

/// The fold without the finiteness guard. Callers must pass finite radians.
pub(crate) fn fold_pair(lat_rad: f64, lon_rad: f64) -> (Angle, Angle) {
    let (lat, crossed_pole) = fold_latitude(lat_rad);

    let lon = if crossed_pole {
        trace!(
            raw_latitude = lat_rad,
            folded_latitude = lat,
            "pole crossing, moving to the opposite meridian"
        );
        lon_rad + PI
    } else {
        lon_rad
    };

    (
        Angle::from_radians(lat),
        Angle::from_radians(wrap_pm_pi_upper(lon)),
    )
}

fn ensure_finite(angle: Angle, component: &str) -> GeoResult<()> {
    if angle.is_finite() {
        return Ok(());
    }

    Err(GeoError::invalid_argument(
        "canonicalize",
        ArgumentErrorKind::NotFinite,
        &format!("{} is not finite ({})", component, angle.radians()),
    ))
}
