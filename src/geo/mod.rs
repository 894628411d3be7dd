//! Geographic point type
//!
//! A `GeoPoint` is an immutable latitude/longitude pair. The open-data CSV
//! stores coordinates as strings, so construction accepts either numbers or
//! numeric strings; values are always held as `f64` afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate (latitude, longitude)
///
/// Equality is exact numeric equality on both axes: `43.12000000` parsed
/// from a string compares equal to the literal `43.12`. A point with a NaN
/// axis (from an unparseable input) never compares equal to anything,
/// including itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point from numeric coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse a point from string coordinates
    ///
    /// Each axis is parsed independently; a malformed axis yields NaN
    /// rather than an error. Downstream lookups simply never match such a
    /// point.
    pub fn parse(lat: &str, lng: &str) -> Self {
        Self {
            lat: parse_axis(lat),
            lng: parse_axis(lng),
        }
    }

    /// The point as an ordered `[lat, lng]` pair
    pub fn to_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

fn parse_axis(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_strings() {
        let point = GeoPoint::parse("43.643079", "-79.381407");
        assert_eq!(point.lat, 43.643079);
        assert_eq!(point.lng, -79.381407);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let point = GeoPoint::parse(" 43.64 ", "\t-79.38");
        assert_eq!(point, GeoPoint::new(43.64, -79.38));
    }

    #[test]
    fn test_equality_ignores_string_formatting() {
        // Trailing zeros in the source string are not significant
        let parsed = GeoPoint::parse("43.12000000", "-79.9300000");
        assert_eq!(parsed, GeoPoint::new(43.12, -79.93));
    }

    #[test]
    fn test_equality_is_exact() {
        assert_ne!(GeoPoint::new(43.12, -79.93), GeoPoint::new(43.120001, -79.93));
    }

    #[test]
    fn test_malformed_axis_is_nan() {
        let point = GeoPoint::parse("not-a-number", "-79.38");
        assert!(point.lat.is_nan());
        assert_eq!(point.lng, -79.38);
        // NaN poisons equality, so this point can never be looked up
        assert_ne!(point, point);
    }

    #[test]
    fn test_to_pair() {
        let point = GeoPoint::new(43.643079, -79.381407);
        assert_eq!(point.to_pair(), [43.643079, -79.381407]);
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(43.643079, -79.381407);
        assert_eq!(point.to_string(), "(43.643079, -79.381407)");
    }

    #[test]
    fn test_display_drops_trailing_zeros() {
        let point = GeoPoint::parse("43.1200", "-79.9300");
        assert_eq!(point.to_string(), "(43.12, -79.93)");
    }
}
