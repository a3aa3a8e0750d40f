use super::core::Coordinate;
use std::fmt;

impl fmt::Display for Coordinate {
    /// Debug-oriented text form, longitude first. Not meant to be parsed back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coordinate[Longitude={}, Latitude={}]",
            self.longitude(),
            self.latitude()
        )
    }
}
