//! Range folds for geographic angles.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Longitude | (-pi, +pi] | [`wrap_pm_pi_upper`] |
//! | Latitude | [-pi/2, +pi/2] | [`fold_latitude`] |
//!
//! # Folding vs Clamping
//!
//! Latitude is folded, never clamped. Walking north from 80° by 20° does not
//! stop at the pole: it crosses it and continues south at 80° on the opposite
//! meridian. [`fold_latitude`] reports the crossing so the caller can move the
//! longitude by pi.
//!
//! # Boundaries
//!
//! The longitude interval is open below and closed above: -180° becomes +180°.
//! The latitude interval is closed on both sides, and a value exactly on a pole
//! is not a crossing.
//!
//! Both folds use [`crate::math::fmod`], which keeps the sign of the dividend,
//! followed by a sign fix-up.

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to (-pi, +pi] radians.
///
/// ```
/// use celestial_geo::angle::wrap_pm_pi_upper;
/// use std::f64::consts::PI;
///
/// // -180 degrees is excluded and maps to +180
/// assert_eq!(wrap_pm_pi_upper(-PI), PI);
/// assert_eq!(wrap_pm_pi_upper(PI), PI);
/// assert_eq!(wrap_pm_pi_upper(0.0), 0.0);
/// ```
#[inline]
pub fn wrap_pm_pi_upper(x: f64) -> f64 {
    let mut w = fmod(x + PI, TWOPI);
    if w <= 0.0 {
        w += TWOPI;
    }
    w - PI
}

/// Folds a latitude into [-pi/2, +pi/2] radians.
///
/// Returns the folded latitude and `true` when the walk crossed a pole, in
/// which case the matching longitude must be shifted by pi.
///
/// ```
/// use celestial_geo::angle::fold_latitude;
/// use std::f64::consts::FRAC_PI_2;
///
/// // On the pole: no crossing
/// assert_eq!(fold_latitude(FRAC_PI_2), (FRAC_PI_2, false));
///
/// // 100 degrees -> 80 degrees on the far meridian
/// let (lat, crossed) = fold_latitude(100f64.to_radians());
/// assert!((lat.to_degrees() - 80.0).abs() < 1e-12);
/// assert!(crossed);
/// ```
#[inline]
pub fn fold_latitude(x: f64) -> (f64, bool) {
    let mut w = fmod(x + PI, TWOPI);
    if w < 0.0 {
        w += TWOPI;
    }
    let lat = w - PI;

    if lat > HALF_PI {
        (PI - lat, true)
    } else if lat < -HALF_PI {
        (-PI - lat, true)
    } else {
        (lat, false)
    }
}
