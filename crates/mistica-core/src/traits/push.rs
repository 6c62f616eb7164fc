//! Push-notification channel trait.
//!
//! Models a platform notification capability that may be absent, carries a
//! tri-state permission, and issues an asynchronous user prompt. A
//! null-object implementation satisfies environments without the
//! capability, keeping store logic capability-agnostic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::result::AppResult;

/// Permission state of the push capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PushPermission {
    /// The user has not been asked yet (or dismissed the prompt).
    #[default]
    Default,
    /// The user granted permission.
    Granted,
    /// The user denied permission. Terminal: the platform forbids re-asking.
    Denied,
}

impl PushPermission {
    /// Return the permission as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }

    /// Parse a permission from its lowercase string form.
    ///
    /// Unrecognized values fall back to `Default`, matching the
    /// degrade-silently policy of the notification store.
    pub fn parse(s: &str) -> Self {
        match s {
            "granted" => Self::Granted,
            "denied" => Self::Denied,
            _ => Self::Default,
        }
    }
}

impl std::fmt::Display for PushPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A push notification handed to the channel for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushMessage {
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Icon asset path.
    pub icon: Option<String>,
    /// Tag for coalescing duplicate alerts.
    pub tag: String,
    /// Deep-link target opened when the alert is activated.
    pub link: Option<String>,
}

/// Trait for push-notification backends.
#[async_trait]
pub trait PushChannel: Send + Sync + std::fmt::Debug + 'static {
    /// Whether the capability exists at all in this environment.
    fn is_available(&self) -> bool;

    /// The current permission state.
    fn permission(&self) -> PushPermission;

    /// Issue the permission prompt and wait for the user's answer.
    ///
    /// This is the only suspending operation in the notification
    /// subsystem; it resolves when the platform does.
    async fn request_permission(&self) -> PushPermission;

    /// Display a notification. Best-effort: callers swallow failures.
    async fn show(&self, message: &PushMessage) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_roundtrip() {
        for p in [
            PushPermission::Default,
            PushPermission::Granted,
            PushPermission::Denied,
        ] {
            assert_eq!(PushPermission::parse(p.as_str()), p);
        }
    }

    #[test]
    fn test_unknown_permission_falls_back_to_default() {
        assert_eq!(PushPermission::parse("prompt"), PushPermission::Default);
    }
}
