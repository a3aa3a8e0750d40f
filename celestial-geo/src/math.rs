//! Remainder used by the range folds.

/// C `fmod`: the remainder of `x / y`, carrying the sign of `x`.
///
/// A negative angle keeps a negative remainder (`fmod(-π/2, 2π)` is `-π/2`),
/// so each fold, such as [`wrap_pm_pi_upper`](crate::angle::wrap_pm_pi_upper),
/// adds one turn back when the sign lands on the wrong side of its interval.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}
