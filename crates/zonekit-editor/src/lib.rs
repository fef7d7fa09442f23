//! # ZoneKit Editor
//!
//! The interactive zone-map editing core. Three cooperating pieces:
//!
//! - [`FeatureRegistry`]: sole owner of the renderable shapes on the
//!   map surface, each optionally tagged with the persisted record it
//!   represents
//! - [`DrawTool`]: the `Idle → Capturing → Idle` polygon capture state
//!   machine
//! - [`MapEditor`]: orchestration that keeps the checked-record set, the
//!   registry, and the cached record list consistent while driving
//!   create/delete calls through a [`PolygonStore`]
//!
//! The presentation layer reads snapshots (`records`, `features`,
//! `draw_state`) and invokes the operations; it never owns map state.
//!
//! [`PolygonStore`]: zonekit_client::PolygonStore

pub mod draw;
pub mod editor;
pub mod registry;

pub use draw::{DrawState, DrawTool, DEFAULT_CLOSE_TOLERANCE_M};
pub use editor::{EditorError, MapEditor, SaveOutcome, ValidationError};
pub use registry::{FeatureId, FeatureRegistry, MapFeature, RegistryError};
