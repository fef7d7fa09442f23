//! Modal dialog view-state for the map page.

use serde::{Deserialize, Serialize};

/// The name-entry dialog shown after a drawing is completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDialog {
    /// Name being typed for the pending polygon.
    pub name: String,
}

/// The confirmation dialog staged before a polygon is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmDialog {
    /// Record staged for deletion.
    pub polygon_id: i64,
    pub title: String,
    pub message: String,
}
