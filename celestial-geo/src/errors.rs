//! Error types for coordinate construction and comparison.
//!
//! Every failure in this crate is a caller programming error: a non-finite
//! angle handed to a constructor, an out-of-range record under the strict
//! reload policy, or a foreign value handed to the dynamic comparison adapter.
//! None of them are transient, so nothing here is worth retrying.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidArgument`](GeoError::InvalidArgument) | constructors, record reload |
//! | [`TypeMismatch`](GeoError::TypeMismatch) | [`Coordinate::compare_any`](crate::Coordinate::compare_any) |
//!
//! ```
//! use celestial_geo::{ArgumentErrorKind, Coordinate, GeoError};
//!
//! let err = Coordinate::from_radians(f64::NAN, 0.0).unwrap_err();
//! assert!(matches!(
//!     err,
//!     GeoError::InvalidArgument { kind: ArgumentErrorKind::NotFinite, .. }
//! ));
//! ```

use thiserror::Error;

/// Classification of [`GeoError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentErrorKind {
    /// Input value is NaN or infinity.
    NotFinite,
    /// Value outside the canonical range where the caller asked for no repair.
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum GeoError {
    /// A precondition on an input value was violated.
    #[error("Invalid argument in {operation} ({kind:?}): {message}")]
    InvalidArgument {
        operation: String,
        kind: ArgumentErrorKind,
        message: String,
    },

    /// A dynamically-typed comparison received something other than the expected type.
    #[error("Type mismatch in {operation}: expected {expected}")]
    TypeMismatch {
        operation: String,
        expected: &'static str,
    },
}

/// Convenience alias for `Result<T, GeoError>`.
pub type GeoResult<T> = Result<T, GeoError>;

impl GeoError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error with the given kind.
    pub fn invalid_argument(operation: &str, kind: ArgumentErrorKind, reason: &str) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`TypeMismatch`](Self::TypeMismatch) error.
    pub fn type_mismatch(operation: &str, expected: &'static str) -> Self {
        Self::TypeMismatch {
            operation: operation.to_string(),
            expected,
        }
    }

    /// Always `false`: every variant reports a caller bug, not a transient condition.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } => false,
            Self::TypeMismatch { .. } => false,
        }
    }
}
