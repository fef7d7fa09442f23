//! Web Mercator projection between geographic and display coordinates.
//!
//! Handles conversion between geographic coordinates (EPSG:4326,
//! longitude/latitude in degrees) and display coordinates (EPSG:3857,
//! spherical Web Mercator metres). The transform is a fixed, stateless
//! mathematical mapping; no I/O is involved.

use crate::geometry::{LonLat, MapPoint};

/// WGS84 equatorial radius in metres, the sphere radius Web Mercator uses.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude beyond which the Mercator projection diverges; the standard
/// Web Mercator cutoff that maps the world to a square.
pub const MAX_LATITUDE_DEG: f64 = 85.051_128_779_806_59;

/// Projects a geographic coordinate into display space.
///
/// Formula:
/// ```text
/// x = R * lon_rad
/// y = R * ln(tan(π/4 + lat_rad/2))
/// ```
///
/// Latitude is clamped to the Web Mercator valid range so poles do not
/// produce infinities.
pub fn project(geo: LonLat) -> MapPoint {
    let lat = geo.lat.clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG);
    let x = EARTH_RADIUS_M * geo.lon.to_radians();
    let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    MapPoint::new(x, y)
}

/// Unprojects a display coordinate back to geographic space.
///
/// Formula:
/// ```text
/// lon = x / R
/// lat = 2 * atan(exp(y / R)) - π/2
/// ```
pub fn unproject(point: MapPoint) -> LonLat {
    let lon = (point.x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (point.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    LonLat::new(lon, lat)
}
