//! Shell flow tests: user actions in, view-state and notifications out.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use zonekit_client::{
    ApiError, Citizen, CitizenStore, CreatePolygon, PolygonRecord, PolygonStore,
};
use zonekit_core::{codec, MapPoint};
use zonekit_editor::DrawState;
use zonekit_ui::{AlertLevel, CitizenPage, MapPage, ModalKind};

fn square_ring() -> Vec<MapPoint> {
    vec![
        MapPoint::new(0.0, 0.0),
        MapPoint::new(1_000.0, 0.0),
        MapPoint::new(1_000.0, 1_000.0),
        MapPoint::new(0.0, 1_000.0),
    ]
}

fn record(id: i64, name: &str) -> PolygonRecord {
    PolygonRecord {
        id,
        name: name.to_string(),
        geometry: codec::ring_to_geometry(&square_ring()),
        created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
    }
}

fn remote_error() -> ApiError {
    ApiError::Status {
        endpoint: "/polygons".to_string(),
        status: 500,
        body: "internal error".to_string(),
    }
}

#[derive(Default)]
struct PolygonFakeInner {
    records: Mutex<Vec<PolygonRecord>>,
    next_id: AtomicI64,
    fail_create: AtomicBool,
    fail_delete: AtomicBool,
}

#[derive(Clone, Default)]
struct PolygonFake(Arc<PolygonFakeInner>);

impl PolygonFake {
    fn seeded(records: Vec<PolygonRecord>) -> Self {
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let fake = Self::default();
        *fake.0.records.lock().unwrap() = records;
        fake.0.next_id.store(max_id, Ordering::SeqCst);
        fake
    }
}

#[async_trait]
impl PolygonStore for PolygonFake {
    async fn list(&self) -> Result<Vec<PolygonRecord>, ApiError> {
        Ok(self.0.records.lock().unwrap().clone())
    }

    async fn create(&self, polygon: CreatePolygon) -> Result<PolygonRecord, ApiError> {
        if self.0.fail_create.load(Ordering::SeqCst) {
            return Err(remote_error());
        }
        let id = self.0.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = PolygonRecord {
            id,
            name: polygon.name,
            geometry: polygon.geometry,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        };
        self.0.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if self.0.fail_delete.load(Ordering::SeqCst) {
            return Err(remote_error());
        }
        self.0.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

fn draw_square<S: PolygonStore>(page: &mut MapPage<S>) {
    page.start_drawing();
    assert_eq!(page.draw_state(), DrawState::Capturing);
    for point in square_ring() {
        page.map_click(point);
    }
    page.map_click(MapPoint::new(0.0, 0.0));
}

#[tokio::test]
async fn drawing_a_ring_opens_the_save_dialog() {
    let mut page = MapPage::new(PolygonFake::default());
    draw_square(&mut page);

    assert!(page.save_dialog().is_some());
    assert_eq!(page.draw_state(), DrawState::Idle);
}

#[tokio::test]
async fn successful_save_closes_the_dialog_and_confirms() {
    let mut page = MapPage::new(PolygonFake::seeded(vec![record(6, "Old Zone")]));
    page.load().await;
    draw_square(&mut page);

    page.set_pending_name("Park A");
    page.save_clicked().await;

    assert!(page.save_dialog().is_none());
    let alert = page.alert().expect("success alert expected");
    assert_eq!(alert.level, AlertLevel::Success);
    assert!(alert.message.contains("Park A"));
    assert!(page.is_checked(7));
    assert!(page.records().iter().any(|r| r.id == 7));
}

#[tokio::test]
async fn empty_name_warns_and_keeps_the_dialog_open() {
    let mut page = MapPage::new(PolygonFake::default());
    draw_square(&mut page);

    page.save_clicked().await;

    assert!(page.save_dialog().is_some(), "dialog must stay open");
    assert_eq!(page.alert().unwrap().level, AlertLevel::Warning);
    // The drawn shape is still on the surface awaiting a retry.
    assert_eq!(page.features().len(), 1);
}

#[tokio::test]
async fn failed_save_keeps_dialog_and_drawing_for_retry() {
    let fake = PolygonFake::default();
    fake.0.fail_create.store(true, Ordering::SeqCst);
    let mut page = MapPage::new(fake.clone());
    draw_square(&mut page);

    page.set_pending_name("Park A");
    page.save_clicked().await;

    assert!(page.save_dialog().is_some());
    assert_eq!(page.alert().unwrap().level, AlertLevel::Error);
    assert_eq!(page.features().len(), 1);
    assert!(page.features()[0].record.is_none());

    // Retry once the backend recovers.
    fake.0.fail_create.store(false, Ordering::SeqCst);
    page.save_clicked().await;
    assert!(page.save_dialog().is_none());
    assert_eq!(page.alert().unwrap().level, AlertLevel::Success);
}

#[tokio::test]
async fn cancelling_the_save_discards_the_drawing() {
    let mut page = MapPage::new(PolygonFake::default());
    draw_square(&mut page);

    page.save_cancelled();
    assert!(page.save_dialog().is_none());
    assert!(page.features().is_empty());
}

#[tokio::test]
async fn delete_flow_is_two_phase() {
    let mut page = MapPage::new(PolygonFake::seeded(vec![record(5, "Zone 5")]));
    page.load().await;

    page.request_delete(5);
    let dialog = page.confirm_dialog().expect("confirmation expected");
    assert!(dialog.message.contains("Zone 5"));
    // Nothing deleted yet.
    assert!(page.records().iter().any(|r| r.id == 5));

    page.delete_confirmed().await;
    assert!(page.confirm_dialog().is_none());
    assert!(!page.records().iter().any(|r| r.id == 5));
    assert_eq!(page.alert().unwrap().level, AlertLevel::Success);
}

#[tokio::test]
async fn failed_delete_reports_and_keeps_the_record() {
    let fake = PolygonFake::seeded(vec![record(5, "Zone 5")]);
    fake.0.fail_delete.store(true, Ordering::SeqCst);
    let mut page = MapPage::new(fake);
    page.load().await;
    let target = page.records()[0].clone();
    page.toggle(&target, true);

    page.request_delete(5);
    page.delete_confirmed().await;

    assert_eq!(page.alert().unwrap().level, AlertLevel::Error);
    assert!(page.records().iter().any(|r| r.id == 5));
    assert!(page.is_checked(5));
    assert_eq!(page.features().len(), 1);
}

#[tokio::test]
async fn alert_auto_dismisses_on_tick() {
    let mut page = MapPage::new(PolygonFake::seeded(vec![record(5, "Zone 5")]));
    page.load().await;
    page.request_delete(5);
    page.delete_confirmed().await;
    assert!(page.alert().is_some());

    page.tick(Utc::now() + chrono::Duration::seconds(6));
    assert!(page.alert().is_none());
}

// ─── Citizen table ───

#[derive(Default)]
struct CitizenFakeInner {
    citizens: Mutex<Vec<Citizen>>,
    fail_update: AtomicBool,
}

#[derive(Clone, Default)]
struct CitizenFake(Arc<CitizenFakeInner>);

impl CitizenFake {
    fn seeded(citizens: Vec<Citizen>) -> Self {
        let fake = Self::default();
        *fake.0.citizens.lock().unwrap() = citizens;
        fake
    }
}

#[async_trait]
impl CitizenStore for CitizenFake {
    async fn list(&self) -> Result<Vec<Citizen>, ApiError> {
        Ok(self.0.citizens.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Citizen, ApiError> {
        self.0
            .citizens
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(remote_error)
    }

    async fn create(&self, _citizen: zonekit_client::NewCitizen) -> Result<Citizen, ApiError> {
        Err(remote_error())
    }

    async fn update(&self, id: i64, citizen: Citizen) -> Result<Citizen, ApiError> {
        if self.0.fail_update.load(Ordering::SeqCst) {
            return Err(remote_error());
        }
        let mut citizens = self.0.citizens.lock().unwrap();
        if let Some(row) = citizens.iter_mut().find(|c| c.id == id) {
            *row = citizen.clone();
        }
        Ok(citizen)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.0.citizens.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

fn citizen(id: i64, name: &str) -> Citizen {
    Citizen {
        id,
        name: name.to_string(),
        surname: "Yekayev".to_string(),
        fin: "AZ12345".to_string(),
        serial_no: "AZE1234567".to_string(),
        birth_date: "1991-04-12T00:00:00Z".to_string(),
    }
}

#[tokio::test]
async fn edit_modal_prefills_the_form_with_the_date_part() {
    let mut page = CitizenPage::new(CitizenFake::seeded(vec![citizen(3, "Elvin")]));
    page.load().await;

    page.open_modal(ModalKind::Edit, 3);
    assert_eq!(page.form().name, "Elvin");
    assert_eq!(page.form().birth_date, "1991-04-12");
}

#[tokio::test]
async fn saving_the_edit_replaces_the_row_in_place() {
    let mut page = CitizenPage::new(CitizenFake::seeded(vec![
        citizen(3, "Elvin"),
        citizen(4, "Aysel"),
    ]));
    page.load().await;

    page.open_modal(ModalKind::Edit, 3);
    page.form_mut().name = "Elvin Updated".to_string();
    page.save_edit().await;

    assert!(page.modal().is_none());
    assert_eq!(page.citizens()[0].name, "Elvin Updated");
    assert_eq!(page.citizens()[1].name, "Aysel");
}

#[tokio::test]
async fn failed_update_keeps_the_modal_and_warns() {
    let fake = CitizenFake::seeded(vec![citizen(3, "Elvin")]);
    fake.0.fail_update.store(true, Ordering::SeqCst);
    let mut page = CitizenPage::new(fake);
    page.load().await;

    page.open_modal(ModalKind::Edit, 3);
    page.save_edit().await;

    assert!(page.modal().is_some());
    assert_eq!(page.alert().unwrap().level, AlertLevel::Error);
    assert_eq!(page.citizens()[0].name, "Elvin");
}

#[tokio::test]
async fn delete_modal_removes_the_row_on_confirm() {
    let mut page = CitizenPage::new(CitizenFake::seeded(vec![
        citizen(3, "Elvin"),
        citizen(4, "Aysel"),
    ]));
    page.load().await;

    page.open_modal(ModalKind::Delete, 3);
    page.delete_confirmed().await;

    assert!(page.modal().is_none());
    assert_eq!(page.citizens().len(), 1);
    assert_eq!(page.citizens()[0].id, 4);
}
