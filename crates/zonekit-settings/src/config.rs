//! Application settings.
//!
//! Settings are stored as a TOML file in the platform config directory
//! and organized into logical sections:
//! - API settings (service base URL, request timeout)
//! - Map settings (initial view position and zoom)
//!
//! The `ZONEKIT_API_URL` environment variable overrides the configured
//! base URL, which keeps deployments and local development on the same
//! file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "ZONEKIT_API_URL";

/// Registry service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the registry API.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5177/api".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Initial map view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    /// Initial view centre longitude, degrees.
    pub center_lon: f64,
    /// Initial view centre latitude, degrees.
    pub center_lat: f64,
    /// Initial zoom level.
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        // Baku city centre.
        Self {
            center_lon: 49.8671,
            center_lat: 40.4093,
            zoom: 12,
        }
    }
}

/// Complete application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub map: MapSettings,
}

impl Settings {
    /// Default location of the settings file.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })?
            .join("zonekit");
        Ok(dir.join("settings.toml"))
    }

    /// Loads settings from the default location, falling back to
    /// defaults when no file exists yet. Environment overrides apply in
    /// both cases.
    pub fn load() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        let mut settings = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Self::default()
        };
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)
            .map_err(|e| SettingsError::LoadError(format!("invalid TOML config: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Saves settings as TOML, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| SettingsError::SaveError(format!("failed to serialize config: {e}")))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Applies environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
    }

    /// Validates configuration values.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "api.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.api.timeout_ms == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "api.timeout_ms".to_string(),
                reason: "must be > 0".to_string(),
            });
        }
        if !(-180.0..=180.0).contains(&self.map.center_lon) {
            return Err(SettingsError::InvalidSetting {
                key: "map.center_lon".to_string(),
                reason: "must be within [-180, 180]".to_string(),
            });
        }
        if !(-90.0..=90.0).contains(&self.map.center_lat) {
            return Err(SettingsError::InvalidSetting {
                key: "map.center_lat".to_string(),
                reason: "must be within [-90, 90]".to_string(),
            });
        }
        Ok(())
    }
}
