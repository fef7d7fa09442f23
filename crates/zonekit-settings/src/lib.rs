//! # ZoneKit Settings
//!
//! Configuration file handling for the admin application: a TOML file in
//! the platform config directory with environment overrides for
//! deployment, validated on load and save.

pub mod config;
pub mod error;

pub use config::{ApiSettings, MapSettings, Settings, API_URL_ENV};
pub use error::{SettingsError, SettingsResult};
