//! Interactive polygon capture tool.
//!
//! A small state machine: `Idle → Capturing → Idle`. While capturing,
//! each pointer click appends a vertex; clicking back on the first
//! vertex (within a tolerance) closes the ring and returns it. The
//! completed ring is the only way a new unpersisted feature comes into
//! existence.

use zonekit_core::MapPoint;

/// Whether the capture tool is attached to the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    Capturing,
}

/// Snap distance for closing the ring, in display metres.
pub const DEFAULT_CLOSE_TOLERANCE_M: f64 = 10.0;

/// Vertex-capture tool for drawing a polygon ring.
#[derive(Debug, Clone)]
pub struct DrawTool {
    state: DrawState,
    vertices: Vec<MapPoint>,
    close_tolerance: f64,
}

impl DrawTool {
    pub fn new(close_tolerance: f64) -> Self {
        Self {
            state: DrawState::Idle,
            vertices: Vec::new(),
            close_tolerance,
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Vertices accumulated so far, for in-progress rendering.
    pub fn pending_vertices(&self) -> &[MapPoint] {
        &self.vertices
    }

    /// Attaches the tool. Calling while already capturing is a no-op, so
    /// a double-click on the draw button cannot restart a session.
    pub fn start(&mut self) {
        if self.state == DrawState::Capturing {
            return;
        }
        self.state = DrawState::Capturing;
        self.vertices.clear();
    }

    /// Detaches the tool without producing a shape. No-op from `Idle`.
    pub fn cancel(&mut self) {
        self.state = DrawState::Idle;
        self.vertices.clear();
    }

    /// Feeds a pointer click to the tool.
    ///
    /// Returns the completed ring when the click closes it (at least
    /// three vertices and the click lands within the closing tolerance
    /// of the first vertex); the tool detaches itself in that case.
    /// Clicks are ignored while idle, as are non-finite positions.
    pub fn add_vertex(&mut self, point: MapPoint) -> Option<Vec<MapPoint>> {
        if self.state != DrawState::Capturing {
            return None;
        }
        if !point.is_finite() {
            tracing::warn!(%point, "ignoring non-finite pointer position");
            return None;
        }

        if self.vertices.len() >= 3 {
            if let Some(first) = self.vertices.first() {
                if point.distance_to(first) <= self.close_tolerance {
                    self.state = DrawState::Idle;
                    return Some(std::mem::take(&mut self.vertices));
                }
            }
        }

        self.vertices.push(point);
        None
    }
}

impl Default for DrawTool {
    fn default() -> Self {
        Self::new(DEFAULT_CLOSE_TOLERANCE_M)
    }
}
