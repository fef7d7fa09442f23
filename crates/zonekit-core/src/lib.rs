//! # ZoneKit Core
//!
//! Core geometry types and conversions shared by the ZoneKit crates:
//!
//! - **Geometry types**: [`MapPoint`] (projected display coordinates) and
//!   [`LonLat`] (geographic coordinates)
//! - **Projection**: the Web Mercator transform between the two coordinate
//!   reference systems ([`mercator`])
//! - **Codec**: conversion between display-space polygon rings and the
//!   GeoJSON polygons the zone service stores ([`codec`])
//!
//! The backend only ever sees geographic (longitude/latitude) GeoJSON;
//! everything rendered on the map surface is in display coordinates. The
//! codec in this crate is the single place where that boundary is crossed.

pub mod codec;
pub mod error;
pub mod geometry;
pub mod mercator;

pub use codec::{geometry_to_ring, ring_to_geometry};
pub use error::GeometryError;
pub use geometry::{LonLat, MapPoint};
