//! Notification category enumeration.

use serde::{Deserialize, Serialize};

/// Origin domain of a notification event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    /// Course module notifications.
    Module,
    /// Feed notifications.
    Feed,
    /// Community wall notifications.
    Community,
}

impl NotificationCategory {
    /// Return the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Feed => "feed",
            Self::Community => "community",
        }
    }
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
