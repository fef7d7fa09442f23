//! Geometry errors raised at the interchange boundary.

use thiserror::Error;

/// Errors decoding a stored geometry into a renderable ring.
///
/// A decode failure means the record cannot be rendered; callers must not
/// add a feature for it and should surface the failure instead of
/// aborting whatever else they are doing (e.g. loading the rest of a
/// record list).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The stored geometry is not a polygon.
    #[error("expected a Polygon geometry, found {found}")]
    NotAPolygon {
        /// Name of the geometry type actually found.
        found: String,
    },

    /// The polygon has no exterior ring.
    #[error("polygon has no exterior ring")]
    MissingRing,

    /// The exterior ring has too few distinct vertices to bound an area.
    #[error("polygon ring has only {count} distinct vertices, need at least 3")]
    TooFewVertices {
        /// Number of distinct vertices found.
        count: usize,
    },

    /// A ring position is malformed (missing ordinate or non-finite).
    #[error("malformed coordinate at ring position {index}")]
    MalformedCoordinate {
        /// Zero-based index of the bad position in the exterior ring.
        index: usize,
    },
}
