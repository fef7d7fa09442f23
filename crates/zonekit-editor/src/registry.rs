//! In-memory registry of renderable map features.
//!
//! The registry is the sole owner of every shape placed on the map
//! surface. Each feature may carry the id of the persisted polygon
//! record it represents; a feature without a tag is a freshly drawn
//! draft that has not been saved yet. The association lives here, typed,
//! rather than as a property stuffed onto the shape.

use thiserror::Error;
use zonekit_core::MapPoint;

/// Registry-local feature identifier.
pub type FeatureId = u64;

/// Errors from registry mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A feature tagged with this record id already exists.
    #[error("a feature for polygon {record} is already registered")]
    DuplicateTag { record: i64 },

    /// No feature with the given registry id exists.
    #[error("unknown feature {feature}")]
    UnknownFeature { feature: FeatureId },
}

/// A renderable shape on the map surface, in display coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFeature {
    /// Registry-assigned identifier.
    pub id: FeatureId,
    /// Persisted record this feature renders, if any.
    pub record: Option<i64>,
    /// Open polygon ring (no duplicate closing vertex).
    pub ring: Vec<MapPoint>,
}

/// Owns the full set of features currently on the map surface.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: Vec<MapFeature>,
    next_id: FeatureId,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id(&mut self) -> FeatureId {
        self.next_id += 1;
        self.next_id
    }

    /// Inserts an untagged feature (a drawn draft) and returns its id.
    pub fn insert(&mut self, ring: Vec<MapPoint>) -> FeatureId {
        let id = self.generate_id();
        self.features.push(MapFeature {
            id,
            record: None,
            ring,
        });
        id
    }

    /// Inserts a feature already tagged with a record id.
    ///
    /// Rejects a duplicate tag: callers keep at most one feature per
    /// record, and a silent double-add would break that.
    pub fn insert_tagged(
        &mut self,
        record: i64,
        ring: Vec<MapPoint>,
    ) -> Result<FeatureId, RegistryError> {
        if self.find_record(record).is_some() {
            return Err(RegistryError::DuplicateTag { record });
        }
        let id = self.generate_id();
        self.features.push(MapFeature {
            id,
            record: Some(record),
            ring,
        });
        Ok(id)
    }

    /// Tags an existing (draft) feature with a record id after the
    /// record has been persisted.
    pub fn tag(&mut self, feature: FeatureId, record: i64) -> Result<(), RegistryError> {
        if self.find_record(record).is_some() {
            return Err(RegistryError::DuplicateTag { record });
        }
        let entry = self
            .features
            .iter_mut()
            .find(|f| f.id == feature)
            .ok_or(RegistryError::UnknownFeature { feature })?;
        entry.record = Some(record);
        Ok(())
    }

    /// Removes the feature tagged with `record`.
    ///
    /// Idempotent: removing an absent tag is a no-op returning `false`,
    /// so racing deletions (double-click) cannot fail.
    pub fn remove_record(&mut self, record: i64) -> bool {
        let before = self.features.len();
        self.features.retain(|f| f.record != Some(record));
        before != self.features.len()
    }

    /// Removes a feature by registry id (discarding a draft). Idempotent.
    pub fn remove(&mut self, feature: FeatureId) -> bool {
        let before = self.features.len();
        self.features.retain(|f| f.id != feature);
        before != self.features.len()
    }

    /// Looks up a feature by registry id.
    pub fn get(&self, feature: FeatureId) -> Option<&MapFeature> {
        self.features.iter().find(|f| f.id == feature)
    }

    /// Looks up the feature tagged with `record`.
    pub fn find_record(&self, record: i64) -> Option<&MapFeature> {
        self.features.iter().find(|f| f.record == Some(record))
    }

    /// The full live feature set, for rendering. Read-only snapshot
    /// semantics: mutating the registry requires its own methods.
    pub fn features(&self) -> &[MapFeature] {
        &self.features
    }

    /// Removes all features (map surface teardown).
    pub fn clear(&mut self) {
        self.features.clear();
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
