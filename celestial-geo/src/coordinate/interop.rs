//! Comparison entry points for dynamically-typed call sites.
//!
//! `Ord` and `PartialEq` on [`Coordinate`] are the primary comparison API and
//! carry no runtime checks. Code that only holds a `&dyn Any` (plugin hosts,
//! heterogeneous registries) goes through these adapters instead, which fail
//! with [`GeoError::TypeMismatch`] for anything that is not a `Coordinate`.
//!
//! The downcast is exact: a `&Coordinate` erased as `&dyn Any` matches, but a
//! `Box<Coordinate>` or `&&Coordinate` erased the same way does not.

use std::any::Any;
use std::cmp::Ordering;

use tracing::debug;

use super::core::Coordinate;
use crate::errors::{GeoError, GeoResult};

impl Coordinate {
    /// Orders `self` against a value of unknown type.
    ///
    /// ```
    /// use celestial_geo::Coordinate;
    /// use std::cmp::Ordering;
    ///
    /// let a = Coordinate::from_degrees(0.0, -10.0)?;
    /// let b = Coordinate::from_degrees(0.0, 10.0)?;
    /// assert_eq!(a.compare_any(&b)?, Ordering::Less);
    /// assert!(a.compare_any(&"not a coordinate").is_err());
    /// # Ok::<(), celestial_geo::GeoError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`GeoError::TypeMismatch`] if `other` is not a `Coordinate`.
    pub fn compare_any(&self, other: &dyn Any) -> GeoResult<Ordering> {
        downcast(other, "compare_any").map(|c| self.cmp(c))
    }

    /// Equality against a value of unknown type.
    ///
    /// # Errors
    ///
    /// [`GeoError::TypeMismatch`] if `other` is not a `Coordinate`.
    pub fn equals_any(&self, other: &dyn Any) -> GeoResult<bool> {
        downcast(other, "equals_any").map(|c| self == c)
    }
}

fn downcast<'a>(other: &'a dyn Any, operation: &str) -> GeoResult<&'a Coordinate> {
    match other.downcast_ref::<Coordinate>() {
        Some(c) => Ok(c),
        None => {
            debug!(operation, type_id = ?other.type_id(), "rejected non-coordinate operand");
            Err(GeoError::type_mismatch(operation, "Coordinate"))
        }
    }
}
