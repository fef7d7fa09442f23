//! Citizen table shell: rows, modal state machine, and edit form buffer.

use serde::{Deserialize, Serialize};
use tracing::warn;

use zonekit_client::{Citizen, CitizenStore};

use crate::alert::{Alert, AlertState};

/// Which modal is open over the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalKind {
    View,
    Edit,
    Delete,
}

/// Edit form buffer; all fields are the raw strings being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenForm {
    pub name: String,
    pub surname: String,
    pub fin: String,
    pub serial_no: String,
    pub birth_date: String,
}

impl CitizenForm {
    fn from_citizen(citizen: &Citizen) -> Self {
        Self {
            name: citizen.name.clone(),
            surname: citizen.surname.clone(),
            fin: citizen.fin.clone(),
            serial_no: citizen.serial_no.clone(),
            // The service returns a timestamp; the date input wants the
            // date part only.
            birth_date: citizen
                .birth_date
                .split('T')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// View-state and behavior of the citizen records table.
#[derive(Debug)]
pub struct CitizenPage<S> {
    store: S,
    citizens: Vec<Citizen>,
    modal: Option<(ModalKind, Citizen)>,
    form: CitizenForm,
    alert: AlertState,
}

impl<S: CitizenStore> CitizenPage<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            citizens: Vec::new(),
            modal: None,
            form: CitizenForm::default(),
            alert: AlertState::new(),
        }
    }

    // ─── Render snapshots ───

    pub fn citizens(&self) -> &[Citizen] {
        &self.citizens
    }

    pub fn modal(&self) -> Option<(&ModalKind, &Citizen)> {
        self.modal.as_ref().map(|(kind, citizen)| (kind, citizen))
    }

    pub fn form(&self) -> &CitizenForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CitizenForm {
        &mut self.form
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.current()
    }

    pub fn tick(&mut self, now: chrono::DateTime<chrono::Utc>) {
        self.alert.tick(now);
    }

    // ─── Flows ───

    /// Initial table load.
    pub async fn load(&mut self) {
        match self.store.list().await {
            Ok(citizens) => self.citizens = citizens,
            Err(e) => {
                warn!(error = %e, "citizen list load failed");
                self.alert.show(Alert::error(
                    "Load failed",
                    "The citizen list could not be loaded.",
                ));
            }
        }
    }

    /// Opens a modal over a row; the edit modal prefills the form.
    pub fn open_modal(&mut self, kind: ModalKind, id: i64) {
        let Some(citizen) = self.citizens.iter().find(|c| c.id == id).cloned() else {
            return;
        };
        if kind == ModalKind::Edit {
            self.form = CitizenForm::from_citizen(&citizen);
        }
        self.modal = Some((kind, citizen));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Submits the edit form, replacing the row in place on success.
    pub async fn save_edit(&mut self) {
        let Some((ModalKind::Edit, selected)) = self.modal.clone() else {
            return;
        };
        let updated = Citizen {
            id: selected.id,
            name: self.form.name.clone(),
            surname: self.form.surname.clone(),
            fin: self.form.fin.clone(),
            serial_no: self.form.serial_no.clone(),
            birth_date: self.form.birth_date.clone(),
        };
        match self.store.update(selected.id, updated).await {
            Ok(saved) => {
                if let Some(row) = self.citizens.iter_mut().find(|c| c.id == saved.id) {
                    *row = saved;
                }
                self.modal = None;
            }
            Err(e) => {
                warn!(id = selected.id, error = %e, "citizen update failed");
                self.alert.show(Alert::error(
                    "Save failed",
                    "The citizen record could not be updated.",
                ));
            }
        }
    }

    /// Confirms the delete modal.
    pub async fn delete_confirmed(&mut self) {
        let Some((ModalKind::Delete, selected)) = self.modal.clone() else {
            return;
        };
        match self.store.delete(selected.id).await {
            Ok(()) => {
                self.citizens.retain(|c| c.id != selected.id);
                self.modal = None;
            }
            Err(e) => {
                warn!(id = selected.id, error = %e, "citizen delete failed");
                self.alert.show(Alert::error(
                    "Delete failed",
                    "The citizen record could not be deleted.",
                ));
            }
        }
    }
}
