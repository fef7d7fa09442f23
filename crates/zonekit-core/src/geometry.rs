//! Coordinate types for the two reference systems the application works in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in display coordinates (Web Mercator, EPSG:3857 metres).
///
/// This is the coordinate space the map surface renders in. Display
/// coordinates never leave the client; the codec converts them to
/// geographic coordinates at the storage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    /// Creates a new display-space point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in display units (metres).
    pub fn distance_to(&self, other: &MapPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A point in geographic coordinates (EPSG:4326, degrees).
///
/// Longitude before latitude, matching GeoJSON position order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    /// Creates a new geographic point.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}°, {:.6}°)", self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = MapPoint::new(0.0, 0.0);
        let b = MapPoint::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn non_finite_detected() {
        assert!(MapPoint::new(1.0, 2.0).is_finite());
        assert!(!MapPoint::new(f64::NAN, 2.0).is_finite());
        assert!(!MapPoint::new(1.0, f64::INFINITY).is_finite());
    }
}
