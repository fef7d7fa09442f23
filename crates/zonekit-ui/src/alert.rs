//! Transient notification state.
//!
//! Alerts are plain view-state values owned by the shell: the rendering
//! layer shows whatever [`AlertState::current`] holds and calls
//! [`AlertState::tick`] each frame so an alert dismisses itself after
//! five seconds, matching the page's notification behavior.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(level: AlertLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Warning, title, message)
    }
}

/// Seconds an alert stays visible before auto-dismissing.
pub const DISMISS_AFTER_SECS: i64 = 5;

/// Holds at most one visible alert with its auto-dismiss deadline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertState {
    current: Option<Alert>,
    shown_at: Option<DateTime<Utc>>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows an alert, replacing any previous one.
    pub fn show(&mut self, alert: Alert) {
        self.current = Some(alert);
        self.shown_at = Some(Utc::now());
    }

    /// The alert to render, if any.
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// Clears the alert immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
        self.shown_at = None;
    }

    /// Auto-dismisses once the deadline has passed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if let Some(shown_at) = self.shown_at {
            if now - shown_at >= Duration::seconds(DISMISS_AFTER_SECS) {
                self.dismiss();
            }
        }
    }
}
