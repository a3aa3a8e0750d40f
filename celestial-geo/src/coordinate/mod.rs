//! The canonical coordinate value type.
//!
//! - [`canonicalize`]: the fold from any finite angle pair to canonical form
//! - [`Coordinate`]: value type holding a canonical pair, with total order and hash
//! - [`CoordinateRecord`] / [`RecordPolicy`]: persisted form and reload rules
//!
//! `Coordinate::compare_any` / `equals_any` cover dynamically-typed callers.

mod canonical;
mod core;
mod format;
mod interop;
mod record;

pub use canonical::canonicalize;
pub use core::Coordinate;
pub use record::{CoordinateRecord, RecordPolicy};
