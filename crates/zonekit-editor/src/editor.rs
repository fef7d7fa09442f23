//! Map editor state: checked records, drawn drafts, and store sync.
//!
//! `MapEditor` keeps three pieces of state consistent under interleaved
//! user actions: the set of record ids currently checked (rendered), the
//! feature registry holding the shapes those ids render as, and the
//! cached record list mirrored from the remote store. The invariant is
//! strict: an id is checked exactly when the registry holds exactly one
//! feature tagged with it, and it is restored synchronously after every
//! toggle, save, and delete.
//!
//! Remote mutations are conservative: local state changes only after the
//! store confirms, so the client never reflects an operation the backend
//! did not also perform. A failed save keeps the drawn shape on the map,
//! untagged, for retry; a failed delete changes nothing at all.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use zonekit_client::{ApiError, CreatePolygon, PolygonRecord, PolygonStore};
use zonekit_core::{codec, GeometryError, MapPoint};

use crate::draw::{DrawState, DrawTool};
use crate::registry::{FeatureId, FeatureRegistry, MapFeature, RegistryError};

/// Input errors caught before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The polygon name is empty after trimming whitespace.
    #[error("polygon name must not be empty")]
    EmptyName,

    /// No completed drawing is awaiting a save.
    #[error("no drawn shape is awaiting a save")]
    NoPendingShape,
}

/// Unified error for editor operations.
///
/// Every fallible operation resolves to a success value or one of these;
/// nothing panics across the presentation boundary.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Remote(#[from] ApiError),
}

/// Result of a save that reached the store.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    /// The record was created and local state now reflects it.
    Saved(PolygonRecord),
    /// The store confirmed the create, but the drawing session it
    /// belonged to was discarded in the meantime; local state was left
    /// alone.
    Stale,
}

/// A completed drawing awaiting the save-or-discard decision.
#[derive(Debug, Clone, Copy)]
struct DrawSession {
    feature: FeatureId,
    seq: u64,
}

/// The map editing surface state, generic over the polygon store.
#[derive(Debug)]
pub struct MapEditor<S> {
    store: S,
    registry: FeatureRegistry,
    draw: DrawTool,
    checked: HashSet<i64>,
    records: Vec<PolygonRecord>,
    session: Option<DrawSession>,
    session_seq: u64,
    pending_delete: Option<i64>,
}

impl<S: PolygonStore> MapEditor<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: FeatureRegistry::new(),
            draw: DrawTool::default(),
            checked: HashSet::new(),
            records: Vec::new(),
            session: None,
            session_seq: 0,
            pending_delete: None,
        }
    }

    // ─── Read surface for the presentation shell ───

    /// The cached record list, in the store's canonical order.
    pub fn records(&self) -> &[PolygonRecord] {
        &self.records
    }

    /// Whether a record is currently rendered on the map.
    pub fn is_checked(&self, id: i64) -> bool {
        self.checked.contains(&id)
    }

    /// The live feature set for rendering.
    pub fn features(&self) -> &[MapFeature] {
        self.registry.features()
    }

    pub fn draw_state(&self) -> DrawState {
        self.draw.state()
    }

    /// Vertices of the ring being drawn right now.
    pub fn pending_vertices(&self) -> &[MapPoint] {
        self.draw.pending_vertices()
    }

    /// True while a completed drawing waits for a name.
    pub fn has_pending_save(&self) -> bool {
        self.session.is_some()
    }

    /// The record id staged for deletion, if any.
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    // ─── List sync ───

    /// Replaces the cached record list from the store.
    ///
    /// Never touches the checked set or the registry: a refresh must not
    /// hide features the user has toggled on.
    pub async fn refresh(&mut self) -> Result<(), EditorError> {
        self.records = self.store.list().await?;
        Ok(())
    }

    // ─── Drawing ───

    pub fn begin_drawing(&mut self) {
        self.draw.start();
    }

    pub fn cancel_drawing(&mut self) {
        self.draw.cancel();
    }

    /// Feeds a map click to the capture tool.
    ///
    /// Returns `true` when the click completed a ring: the shape is now
    /// registered as an untagged draft and a save is pending.
    pub fn pointer_click(&mut self, point: MapPoint) -> bool {
        let Some(ring) = self.draw.add_vertex(point) else {
            return false;
        };
        let feature = self.registry.insert(ring);
        self.session_seq += 1;
        self.session = Some(DrawSession {
            feature,
            seq: self.session_seq,
        });
        true
    }

    /// Persists the pending drawing under `name`.
    ///
    /// Validation happens before any network call. On store failure the
    /// draft stays registered and rendered so the user can retry or
    /// discard. A completion arriving after the session was replaced or
    /// discarded is dropped without touching shared state.
    pub async fn save_drawn(&mut self, name: &str) -> Result<SaveOutcome, EditorError> {
        let session = self.session.ok_or(ValidationError::NoPendingShape)?;
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let ring = self
            .registry
            .get(session.feature)
            .ok_or(ValidationError::NoPendingShape)?
            .ring
            .clone();

        let created = self
            .store
            .create(CreatePolygon {
                name: trimmed.to_string(),
                geometry: codec::ring_to_geometry(&ring),
            })
            .await?;

        match self.complete_save(session.seq, created)? {
            SaveOutcome::Stale => Ok(SaveOutcome::Stale),
            SaveOutcome::Saved(record) => {
                // Re-fetch for canonical ordering and timestamps; if that
                // fails the created record is at least appended locally.
                match self.store.list().await {
                    Ok(records) => self.records = records,
                    Err(e) => {
                        warn!(error = %e, "list refresh after save failed, appending locally");
                        self.records.push(record.clone());
                    }
                }
                Ok(SaveOutcome::Saved(record))
            }
        }
    }

    /// Applies a confirmed create to local state, unless the session it
    /// belongs to is no longer current.
    fn complete_save(
        &mut self,
        seq: u64,
        record: PolygonRecord,
    ) -> Result<SaveOutcome, EditorError> {
        let feature = match self.session {
            Some(session) if session.seq == seq => session.feature,
            _ => {
                debug!(id = record.id, "dropping stale save completion");
                return Ok(SaveOutcome::Stale);
            }
        };
        self.registry.tag(feature, record.id)?;
        self.checked.insert(record.id);
        self.session = None;
        Ok(SaveOutcome::Saved(record))
    }

    /// Removes the pending draft from the map and forgets the session.
    /// Valid in any state; a no-op when nothing is pending.
    pub fn discard_drawn(&mut self) {
        if let Some(session) = self.session.take() {
            self.registry.remove(session.feature);
        }
    }

    // ─── Toggling ───

    /// Shows or hides a record on the map. Purely local.
    ///
    /// Idempotent in both directions: toggling an id already in the
    /// target state changes nothing. A geometry decode failure adds no
    /// feature and leaves the checked set unchanged.
    pub fn toggle(&mut self, record: &PolygonRecord, checked: bool) -> Result<(), EditorError> {
        if checked {
            if self.checked.contains(&record.id) {
                return Ok(());
            }
            let ring = codec::geometry_to_ring(&record.geometry).map_err(|e| {
                warn!(id = record.id, error = %e, "skipping polygon with undecodable geometry");
                e
            })?;
            self.registry.insert_tagged(record.id, ring)?;
            self.checked.insert(record.id);
        } else {
            self.registry.remove_record(record.id);
            self.checked.remove(&record.id);
        }
        Ok(())
    }

    // ─── Two-phase delete ───

    /// Stages a record for deletion. Nothing is deleted until
    /// [`confirm_delete`](Self::confirm_delete) is called.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// Drops the staged deletion without touching anything.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Executes the staged deletion against the store.
    ///
    /// Returns the removed record on success. `Ok(None)` when nothing
    /// was staged or the staged record is gone from the cached list. On
    /// store failure every piece of client state (checked set, registry,
    /// record list) is left exactly as it was, so the UI cannot drift
    /// from the backend.
    pub async fn confirm_delete(&mut self) -> Result<Option<PolygonRecord>, EditorError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };
        let Some(record) = self.records.iter().find(|r| r.id == id).cloned() else {
            debug!(id, "staged record no longer listed, delete dropped");
            return Ok(None);
        };

        self.store.delete(id).await?;

        self.registry.remove_record(id);
        self.checked.remove(&id);
        self.records.retain(|r| r.id != id);
        Ok(Some(record))
    }

    // ─── Teardown ───

    /// Clears all surface state when the map is dismounted. The cached
    /// record list survives; it belongs to the page, not the surface.
    pub fn clear_surface(&mut self) {
        self.registry.clear();
        self.checked.clear();
        self.session = None;
        self.pending_delete = None;
        self.draw.cancel();
    }
}
