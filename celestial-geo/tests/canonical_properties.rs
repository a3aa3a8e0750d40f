use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use celestial_geo::angle::wrap_pm_pi_upper;
use celestial_geo::constants::{HALF_PI, PI};
use celestial_geo::{canonicalize, Angle, Coordinate};

fn hash_of(c: &Coordinate) -> u64 {
    let mut h = DefaultHasher::new();
    c.hash(&mut h);
    h.finish()
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-1e4..1e4f64, -1e4..1e4f64).prop_map(|(lat, lon)| {
        Coordinate::from_radians(lat, lon).expect("finite input always canonicalizes")
    })
}

/// Any finite radian value: the whole `f64` range, plus dense draws near zero.
fn finite_radians() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("finite", |x| x.is_finite()),
        -1e-300..1e-300f64,
        Just(0.0),
        Just(-0.0),
        Just(f64::MAX),
        Just(f64::MIN),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Worked examples
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn overshoot_north_pole_lands_on_far_meridian() {
    let c = Coordinate::from_degrees(100.0, 10.0).unwrap();
    assert_abs_diff_eq!(c.latitude_degrees(), 80.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.longitude_degrees(), -170.0, epsilon = 1e-12);
}

#[test]
fn lower_longitude_bound_maps_to_upper() {
    let c = Coordinate::from_degrees(0.0, -180.0).unwrap();
    assert_eq!(c.latitude_degrees(), 0.0);
    assert_eq!(c.longitude_degrees(), 180.0);
}

#[test]
fn poles_keep_their_longitude() {
    for lon in [-180.0, -45.0, 0.0, 10.0, 179.0, 725.0] {
        let north = Coordinate::from_degrees(90.0, lon).unwrap();
        let south = Coordinate::from_degrees(-90.0, lon).unwrap();
        let expected = wrap_pm_pi_upper(lon.to_radians());

        assert_eq!(north.latitude(), Angle::HALF_PI);
        assert_eq!(south.latitude(), -Angle::HALF_PI);
        assert_eq!(north.longitude().radians(), expected);
        assert_eq!(south.longitude().radians(), expected);
    }
}

#[test]
fn sorting_orders_west_to_east_then_south_to_north() {
    let a = Coordinate::from_degrees(0.0, -10.0).unwrap();
    let b = Coordinate::from_degrees(0.0, 10.0).unwrap();
    let c = Coordinate::from_degrees(5.0, 10.0).unwrap();

    assert!(a < b && b < c);

    let mut v = vec![c, a, b];
    v.sort();
    assert_eq!(v, [a, b, c]);
}

#[test]
fn display_form_is_stable() {
    let c = Coordinate::from_degrees(-33.5, 151.25).unwrap();
    assert_eq!(
        c.to_string(),
        "Coordinate[Longitude=151.250000°, Latitude=-33.500000°]"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based tests
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_range_invariant(lat in -1e6..1e6f64, lon in -1e6..1e6f64) {
        let (la, lo) = canonicalize(Angle::from_radians(lat), Angle::from_radians(lon)).unwrap();
        prop_assert!((-HALF_PI..=HALF_PI).contains(&la.radians()));
        prop_assert!(lo.radians() > -PI && lo.radians() <= PI);
    }

    #[test]
    fn prop_idempotent(lat in -1e6..1e6f64, lon in -1e6..1e6f64) {
        let once = canonicalize(Angle::from_radians(lat), Angle::from_radians(lon)).unwrap();
        let twice = canonicalize(once.0, once.1).unwrap();
        prop_assert_eq!(once.0.radians().to_bits(), twice.0.radians().to_bits());
        prop_assert_eq!(once.1.radians().to_bits(), twice.1.radians().to_bits());
    }

    #[test]
    fn prop_range_invariant_any_magnitude(lat in finite_radians(), lon in finite_radians()) {
        let (la, lo) = canonicalize(Angle::from_radians(lat), Angle::from_radians(lon)).unwrap();
        prop_assert!((-HALF_PI..=HALF_PI).contains(&la.radians()));
        prop_assert!(lo.radians() > -PI && lo.radians() <= PI);
    }

    #[test]
    fn prop_idempotent_any_magnitude(lat in finite_radians(), lon in finite_radians()) {
        let once = canonicalize(Angle::from_radians(lat), Angle::from_radians(lon)).unwrap();
        let twice = canonicalize(once.0, once.1).unwrap();
        prop_assert_eq!(once.0.radians().to_bits(), twice.0.radians().to_bits());
        prop_assert_eq!(once.1.radians().to_bits(), twice.1.radians().to_bits());
    }

    #[test]
    fn prop_pole_fixed_points(lon in -1e4..1e4f64) {
        let north = Coordinate::from_radians(HALF_PI, lon).unwrap();
        let south = Coordinate::from_radians(-HALF_PI, lon).unwrap();
        prop_assert_eq!(north.latitude().radians(), HALF_PI);
        prop_assert_eq!(south.latitude().radians(), -HALF_PI);
        prop_assert_eq!(north.longitude().radians(), wrap_pm_pi_upper(lon));
        prop_assert_eq!(south.longitude().radians(), wrap_pm_pi_upper(lon));
    }

    #[test]
    fn prop_equal_inputs_hash_equal(lat in -HALF_PI..=HALF_PI) {
        // -180° and +180° are one meridian
        let west = Coordinate::from_radians(lat, -PI).unwrap();
        let east = Coordinate::from_radians(lat, PI).unwrap();
        prop_assert_eq!(west, east);
        prop_assert_eq!(hash_of(&west), hash_of(&east));
    }

    #[test]
    fn prop_reconstructed_equals_original(c in coordinate()) {
        let again = Coordinate::new(c.latitude(), c.longitude()).unwrap();
        prop_assert_eq!(again, c);
        prop_assert_eq!(hash_of(&again), hash_of(&c));
        prop_assert_eq!(again.cmp(&c), Ordering::Equal);
    }

    #[test]
    fn prop_order_antisymmetric(a in coordinate(), b in coordinate()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn prop_sorted_by_longitude_then_latitude(mut v in prop::collection::vec(coordinate(), 0..32)) {
        v.sort();
        for w in v.windows(2) {
            let (p, q) = (w[0], w[1]);
            prop_assert!(p.longitude() <= q.longitude());
            if p.longitude() == q.longitude() {
                prop_assert!(p.latitude() <= q.latitude());
            }
        }
    }

    #[test]
    fn prop_antipode_is_involution(c in coordinate()) {
        let back = c.antipode().antipode();
        assert_abs_diff_eq!(back.latitude().radians(), c.latitude().radians(), epsilon = 1e-15);
        // Compare on the circle: near the antimeridian the two may sit on opposite bounds
        let dlon = wrap_pm_pi_upper(back.longitude().radians() - c.longitude().radians());
        assert_abs_diff_eq!(dlon, 0.0, epsilon = 1e-12);
    }
}
