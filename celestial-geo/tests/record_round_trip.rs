use proptest::prelude::*;

use celestial_geo::{ArgumentErrorKind, Coordinate, CoordinateRecord, GeoError};

#[test]
fn json_uses_radian_field_names() {
    let c = Coordinate::from_degrees(100.0, 10.0).unwrap();
    let value: serde_json::Value = serde_json::to_value(c).unwrap();

    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(
        obj["latitudeRadians"].as_f64(),
        Some(c.latitude().radians())
    );
    assert_eq!(
        obj["longitudeRadians"].as_f64(),
        Some(c.longitude().radians())
    );
}

#[test]
fn record_struct_matches_coordinate_encoding() {
    let c = Coordinate::from_degrees(-45.0, 120.0).unwrap();
    let via_record = serde_json::to_string(&c.to_record()).unwrap();
    let direct = serde_json::to_string(&c).unwrap();
    assert_eq!(via_record, direct);

    let record: CoordinateRecord = serde_json::from_str(&direct).unwrap();
    assert_eq!(record, c.to_record());
}

#[test]
fn out_of_range_json_is_repaired() {
    // 100° N at 10° E, written raw
    let json = format!(
        r#"{{"latitudeRadians":{},"longitudeRadians":{}}}"#,
        100f64.to_radians(),
        10f64.to_radians()
    );
    let c: Coordinate = serde_json::from_str(&json).unwrap();
    assert_eq!(c, Coordinate::from_degrees(100.0, 10.0).unwrap());
}

#[test]
fn non_finite_record_fails_to_deserialize() {
    // JSON has no NaN literal; the record path is the only way in
    let record = CoordinateRecord {
        latitude_radians: f64::NAN,
        longitude_radians: 0.0,
    };
    let err = Coordinate::try_from(record).unwrap_err();
    assert!(matches!(
        err,
        GeoError::InvalidArgument {
            kind: ArgumentErrorKind::NotFinite,
            ..
        }
    ));
}

#[test]
fn angle_serializes_as_radians() {
    let a = celestial_geo::Angle::from_degrees(180.0);
    assert_eq!(serde_json::to_string(&a).unwrap(), "3.141592653589793");
}

proptest! {
    #[test]
    fn prop_json_round_trip_bit_identical(lat in -1e4..1e4f64, lon in -1e4..1e4f64) {
        let c = Coordinate::from_radians(lat, lon).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(back, c);
        prop_assert_eq!(back.latitude().radians().to_bits(), c.latitude().radians().to_bits());
        prop_assert_eq!(back.longitude().radians().to_bits(), c.longitude().radians().to_bits());
    }
}
