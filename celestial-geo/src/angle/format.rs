use super::core::Angle;
use std::fmt;

impl fmt::Display for Angle {
    /// Formats the angle as decimal degrees with 6 decimal places.
    ///
    /// Rust's float formatting ignores locale, so the output is stable across
    /// machines: always `.` as the decimal separator and no grouping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
