//! Canonical geographic coordinates.
//!
//! `celestial-geo` provides [`Coordinate`], a latitude/longitude value that is
//! always held in one canonical range no matter what raw angles it was built
//! from:
//!
//! - latitude in [-90°, +90°]
//! - longitude in (-180°, +180°]
//!
//! Out-of-range input is folded, not rejected and not clamped. A latitude that
//! walks past a pole continues down the opposite meridian, so 100° N at 10° E
//! is stored as 80° N at 170° W.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, arithmetic, display, range folds |
//! | [`coordinate`] | [`Coordinate`], [`canonicalize`], persisted record, dynamic comparison |
//! | [`constants`] | pi multiples |
//! | [`errors`] | [`GeoError`] and [`GeoResult`] |
//!
//! # Example
//!
//! ```
//! use celestial_geo::Coordinate;
//!
//! let west = Coordinate::from_degrees(0.0, -10.0)?;
//! let east = Coordinate::from_degrees(0.0, 10.0)?;
//! assert!(west < east);
//!
//! // -180° and +180° are the same meridian; only +180° is canonical
//! assert_eq!(
//!     Coordinate::from_degrees(0.0, -180.0)?,
//!     Coordinate::from_degrees(0.0, 180.0)?,
//! );
//! # Ok::<(), celestial_geo::GeoError>(())
//! ```
//!
//! # Features
//!
//! | Flag | Effect |
//! |------|--------|
//! | `serde` | `Serialize`/`Deserialize` for [`Angle`] (bare radians) and [`Coordinate`] (`{latitudeRadians, longitudeRadians}`) |
//!
//! # Logging
//!
//! Events go through `tracing`; install a subscriber to see them. Pole
//! crossings log at `trace`, repaired records at `warn`.

pub mod angle;
pub mod constants;
pub mod coordinate;
pub mod errors;
pub mod math;

pub use angle::Angle;
pub use coordinate::{canonicalize, Coordinate, CoordinateRecord, RecordPolicy};
pub use errors::{ArgumentErrorKind, GeoError, GeoResult};

#[doc(hidden)]
pub mod test_helpers;
