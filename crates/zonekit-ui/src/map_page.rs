//! Map page shell: composes the editor with alert and dialog view-state.
//!
//! The rendering layer draws from four snapshots (record list, checked
//! predicate, feature enumeration, draw state) and routes every user
//! action through the methods here. Each method converts the editor's
//! outcome into whatever confirmation or notification the user should
//! see; no editor error escapes to the render loop.

use tracing::warn;

use zonekit_client::{PolygonRecord, PolygonStore};
use zonekit_core::MapPoint;
use zonekit_editor::{DrawState, EditorError, MapEditor, MapFeature, SaveOutcome};

use crate::alert::{Alert, AlertState};
use crate::dialogs::{ConfirmDialog, SaveDialog};

/// View-state and behavior of the zone map page.
#[derive(Debug)]
pub struct MapPage<S> {
    editor: MapEditor<S>,
    alert: AlertState,
    save_dialog: Option<SaveDialog>,
    confirm_dialog: Option<ConfirmDialog>,
}

impl<S: PolygonStore> MapPage<S> {
    pub fn new(store: S) -> Self {
        Self {
            editor: MapEditor::new(store),
            alert: AlertState::new(),
            save_dialog: None,
            confirm_dialog: None,
        }
    }

    // ─── Render snapshots ───

    pub fn records(&self) -> &[PolygonRecord] {
        self.editor.records()
    }

    pub fn is_checked(&self, id: i64) -> bool {
        self.editor.is_checked(id)
    }

    pub fn features(&self) -> &[MapFeature] {
        self.editor.features()
    }

    pub fn draw_state(&self) -> DrawState {
        self.editor.draw_state()
    }

    pub fn pending_vertices(&self) -> &[MapPoint] {
        self.editor.pending_vertices()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.current()
    }

    pub fn save_dialog(&self) -> Option<&SaveDialog> {
        self.save_dialog.as_ref()
    }

    pub fn confirm_dialog(&self) -> Option<&ConfirmDialog> {
        self.confirm_dialog.as_ref()
    }

    /// Frame tick: expires the visible alert when its deadline passes.
    pub fn tick(&mut self, now: chrono::DateTime<chrono::Utc>) {
        self.alert.tick(now);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }

    // ─── Page lifecycle ───

    /// Initial load of the polygon list.
    pub async fn load(&mut self) {
        if let Err(e) = self.editor.refresh().await {
            warn!(error = %e, "polygon list load failed");
            self.alert.show(Alert::error(
                "Load failed",
                "The polygon list could not be loaded.",
            ));
        }
    }

    /// Map surface teardown.
    pub fn unmount(&mut self) {
        self.editor.clear_surface();
        self.save_dialog = None;
        self.confirm_dialog = None;
    }

    // ─── Drawing ───

    pub fn start_drawing(&mut self) {
        self.editor.begin_drawing();
    }

    pub fn cancel_drawing(&mut self) {
        self.editor.cancel_drawing();
    }

    /// A click on the map surface. Opens the save dialog when the click
    /// completes the ring.
    pub fn map_click(&mut self, point: MapPoint) {
        if self.editor.pointer_click(point) {
            self.save_dialog = Some(SaveDialog::default());
        }
    }

    /// Updates the name being typed in the save dialog.
    pub fn set_pending_name(&mut self, name: impl Into<String>) {
        if let Some(dialog) = self.save_dialog.as_mut() {
            dialog.name = name.into();
        }
    }

    /// Confirms the save dialog.
    ///
    /// On success the dialog closes and a confirmation is shown. On
    /// validation or store failure the dialog stays open so the user can
    /// correct the name or retry.
    pub async fn save_clicked(&mut self) {
        let Some(dialog) = self.save_dialog.clone() else {
            return;
        };
        match self.editor.save_drawn(&dialog.name).await {
            Ok(SaveOutcome::Saved(record)) => {
                self.save_dialog = None;
                self.alert.show(Alert::success(
                    "Polygon saved",
                    format!("\"{}\" was saved and is visible on the map", record.name),
                ));
            }
            Ok(SaveOutcome::Stale) => {
                self.save_dialog = None;
            }
            Err(EditorError::Validation(_)) => {
                self.alert.show(Alert::warning(
                    "Name required",
                    "Please enter a name for the polygon.",
                ));
            }
            Err(e) => {
                warn!(error = %e, "polygon save failed");
                self.alert.show(Alert::error(
                    "Save failed",
                    "The polygon could not be saved. Please try again.",
                ));
            }
        }
    }

    /// Cancels the save dialog, discarding the drawn shape.
    pub fn save_cancelled(&mut self) {
        self.editor.discard_drawn();
        self.save_dialog = None;
    }

    // ─── List panel ───

    /// Checkbox toggle for a record.
    pub fn toggle(&mut self, record: &PolygonRecord, checked: bool) {
        if let Err(e) = self.editor.toggle(record, checked) {
            warn!(id = record.id, error = %e, "polygon cannot be rendered");
            self.alert.show(Alert::error(
                "Cannot display polygon",
                format!("\"{}\" has invalid geometry and cannot be shown.", record.name),
            ));
        }
    }

    /// Opens the delete confirmation for a record. Deletes nothing yet.
    pub fn request_delete(&mut self, id: i64) {
        let Some(record) = self.editor.records().iter().find(|r| r.id == id) else {
            return;
        };
        self.confirm_dialog = Some(ConfirmDialog {
            polygon_id: id,
            title: "Delete polygon".to_string(),
            message: format!(
                "Are you sure you want to delete \"{}\"? This cannot be undone.",
                record.name
            ),
        });
        self.editor.request_delete(id);
    }

    /// Dismisses the delete confirmation without deleting.
    pub fn delete_cancelled(&mut self) {
        self.confirm_dialog = None;
        self.editor.cancel_delete();
    }

    /// Confirms the staged deletion.
    pub async fn delete_confirmed(&mut self) {
        self.confirm_dialog = None;
        match self.editor.confirm_delete().await {
            Ok(Some(record)) => {
                self.alert.show(Alert::success(
                    "Deleted",
                    format!("\"{}\" was deleted", record.name),
                ));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "polygon delete failed");
                self.alert.show(Alert::error(
                    "Delete failed",
                    "The polygon could not be deleted. Please try again.",
                ));
            }
        }
    }
}
