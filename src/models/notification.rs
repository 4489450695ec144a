//! Notification records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Info => "Info",
            NotificationKind::Success => "Success",
            NotificationKind::Warning => "Warning",
            NotificationKind::Error => "Error",
        }
    }
}

/// A notification as stored. Only `read` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    /// Relative display label, not a timestamp.
    pub time: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub section: String,
}

/// Content supplied by the view raising a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub section: String,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, section: &str, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            section: section.to_string(),
        }
    }
}
