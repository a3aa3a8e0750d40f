//! Assertions shared by unit and integration tests.

use crate::Angle;

/// Signed position of `rad` among the representable doubles. `-0.0` and
/// `+0.0` share rank 0, so the rank is monotone in the value.
fn radian_rank(rad: f64) -> i64 {
    let bits = rad.to_bits() as i64;
    if bits < 0 {
        i64::MIN - bits
    } else {
        bits
    }
}

/// How many representable radian values separate `a` from `b`.
pub fn angle_ulp_distance(a: Angle, b: Angle) -> u64 {
    radian_rank(a.radians()).abs_diff(radian_rank(b.radians()))
}

/// Asserts two angles are within `max_ulp` units in the last place, in radians.
#[track_caller]
pub fn assert_angle_ulp_le(a: Angle, b: Angle, max_ulp: u64) {
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite angle: {a:?} vs {b:?}"
    );
    let d = angle_ulp_distance(a, b);
    assert!(
        d <= max_ulp,
        "ULP={d} exceeds {max_ulp}: {} rad vs {} rad",
        a.radians(),
        b.radians()
    );
}

/// Asserts an angle reads `expected` degrees within `tol` degrees.
#[track_caller]
pub fn assert_degrees_near(a: Angle, expected: f64, tol: f64) {
    let got = a.degrees();
    assert!(
        (got - expected).abs() <= tol,
        "expected {expected}°, got {got}° (tolerance {tol})"
    );
}
