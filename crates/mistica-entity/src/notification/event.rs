//! Notification event kind enumeration.

use serde::{Deserialize, Serialize};

/// Nature of the event that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationEvent {
    /// New content was created.
    Created,
    /// Existing content was updated.
    Updated,
    /// Someone commented.
    Commented,
    /// Someone liked.
    Liked,
}

impl NotificationEvent {
    /// Return the event kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Commented => "commented",
            Self::Liked => "liked",
        }
    }
}

impl std::fmt::Display for NotificationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
