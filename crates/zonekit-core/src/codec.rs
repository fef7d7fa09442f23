//! Conversion between display-space rings and stored GeoJSON polygons.
//!
//! The zone service stores polygon boundaries as GeoJSON `Polygon`
//! geometries in geographic coordinates. The map surface works in display
//! (Web Mercator) coordinates. Encoding reprojects each vertex and closes
//! the exterior ring; decoding accepts closed or open rings and reprojects
//! back. The round trip is lossless for simple polygons up to
//! floating-point precision of the reprojection.

use geojson::{Geometry, Value};

use crate::error::GeometryError;
use crate::geometry::{LonLat, MapPoint};
use crate::mercator;

/// Encodes a display-space ring as a geographic GeoJSON polygon.
///
/// The input ring is taken as open (no duplicate closing vertex); the
/// emitted exterior ring is closed by repeating the first position, as
/// GeoJSON requires. Interior rings are never produced; the drawing tool
/// cannot create holes.
pub fn ring_to_geometry(ring: &[MapPoint]) -> Geometry {
    let mut positions: Vec<Vec<f64>> = ring
        .iter()
        .map(|p| {
            let geo = mercator::unproject(*p);
            vec![geo.lon, geo.lat]
        })
        .collect();
    if let Some(first) = positions.first().cloned() {
        positions.push(first);
    }
    Geometry::new(Value::Polygon(vec![positions]))
}

/// Decodes a stored GeoJSON polygon into a display-space ring.
///
/// Only `Polygon` geometries are accepted; the exterior ring is used and
/// any interior rings are ignored. A duplicate closing vertex is dropped
/// so the returned ring is open. Fails on malformed input rather than
/// producing a degenerate feature.
pub fn geometry_to_ring(geometry: &Geometry) -> Result<Vec<MapPoint>, GeometryError> {
    let rings = match &geometry.value {
        Value::Polygon(rings) => rings,
        other => {
            return Err(GeometryError::NotAPolygon {
                found: other.type_name().to_string(),
            })
        }
    };

    let exterior = rings.first().ok_or(GeometryError::MissingRing)?;

    let mut ring = Vec::with_capacity(exterior.len());
    for (index, position) in exterior.iter().enumerate() {
        let (lon, lat) = match position.as_slice() {
            [lon, lat, ..] => (*lon, *lat),
            _ => return Err(GeometryError::MalformedCoordinate { index }),
        };
        if !lon.is_finite() || !lat.is_finite() {
            return Err(GeometryError::MalformedCoordinate { index });
        }
        ring.push(mercator::project(LonLat::new(lon, lat)));
    }

    // Drop the GeoJSON closing vertex when present.
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    if ring.len() < 3 {
        return Err(GeometryError::TooFewVertices { count: ring.len() });
    }

    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<MapPoint> {
        vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(1_000.0, 0.0),
            MapPoint::new(1_000.0, 1_000.0),
            MapPoint::new(0.0, 1_000.0),
        ]
    }

    #[test]
    fn encode_closes_the_ring() {
        let geometry = ring_to_geometry(&square());
        match &geometry.value {
            Value::Polygon(rings) => {
                let exterior = &rings[0];
                assert_eq!(exterior.len(), 5);
                assert_eq!(exterior.first(), exterior.last());
            }
            other => panic!("expected polygon, got {}", other.type_name()),
        }
    }

    #[test]
    fn round_trip_reproduces_vertices() {
        let original = square();
        let decoded = geometry_to_ring(&ring_to_geometry(&original)).unwrap();
        assert_eq!(decoded.len(), original.len());
        for (a, b) in original.iter().zip(decoded.iter()) {
            assert!(a.distance_to(b) < 1e-6, "vertex drift: {a} vs {b}");
        }
    }

    #[test]
    fn open_ring_is_accepted() {
        // A geometry written without the closing vertex still decodes.
        let geometry = Geometry::new(Value::Polygon(vec![vec![
            vec![49.0, 40.0],
            vec![49.1, 40.0],
            vec![49.1, 40.1],
        ]]));
        let ring = geometry_to_ring(&geometry).unwrap();
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn rejects_non_polygon() {
        let geometry = Geometry::new(Value::Point(vec![49.0, 40.0]));
        assert_eq!(
            geometry_to_ring(&geometry),
            Err(GeometryError::NotAPolygon {
                found: "Point".to_string()
            })
        );
    }

    #[test]
    fn rejects_empty_polygon() {
        let geometry = Geometry::new(Value::Polygon(vec![]));
        assert_eq!(geometry_to_ring(&geometry), Err(GeometryError::MissingRing));
    }

    #[test]
    fn rejects_degenerate_ring() {
        let geometry = Geometry::new(Value::Polygon(vec![vec![
            vec![49.0, 40.0],
            vec![49.1, 40.0],
            vec![49.0, 40.0],
        ]]));
        assert_eq!(
            geometry_to_ring(&geometry),
            Err(GeometryError::TooFewVertices { count: 2 })
        );
    }

    #[test]
    fn rejects_short_position() {
        let geometry = Geometry::new(Value::Polygon(vec![vec![
            vec![49.0, 40.0],
            vec![49.1],
            vec![49.1, 40.1],
        ]]));
        assert_eq!(
            geometry_to_ring(&geometry),
            Err(GeometryError::MalformedCoordinate { index: 1 })
        );
    }

    #[test]
    fn rejects_non_finite_coordinate() {
        let geometry = Geometry::new(Value::Polygon(vec![vec![
            vec![49.0, 40.0],
            vec![f64::NAN, 40.0],
            vec![49.1, 40.1],
            vec![49.0, 40.1],
        ]]));
        assert_eq!(
            geometry_to_ring(&geometry),
            Err(GeometryError::MalformedCoordinate { index: 1 })
        );
    }
}
