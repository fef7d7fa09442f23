//! # ZoneKit UI
//!
//! View-state layer for the two admin surfaces. Nothing here touches a
//! rendering toolkit: each page is a plain-data state machine the
//! front-end binds to. It reads snapshots, forwards user actions, and
//! renders whatever alert or dialog the page currently holds.
//!
//! - [`MapPage`]: the zone map, with its record list panel, checkbox
//!   toggles, drawing flow, save/confirm dialogs, and notifications
//! - [`CitizenPage`]: the citizen table with its view/edit/delete
//!   modal flow

pub mod alert;
pub mod citizen_page;
pub mod dialogs;
pub mod map_page;

pub use alert::{Alert, AlertLevel, AlertState, DISMISS_AFTER_SECS};
pub use citizen_page::{CitizenForm, CitizenPage, ModalKind};
pub use dialogs::{ConfirmDialog, SaveDialog};
pub use map_page::MapPage;
