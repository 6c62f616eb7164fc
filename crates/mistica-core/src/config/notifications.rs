//! Notification store configuration.

use serde::{Deserialize, Serialize};

/// Notification persistence and push-channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Persistence backend: `"memory"` or `"file"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Data directory for the file backend.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Push channel: `"broadcast"` or `"none"`.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// How the permission prompt resolves: `"granted"`, `"denied"`, or
    /// `"default"` (prompt dismissed without an answer).
    #[serde(default = "default_prompt_decision")]
    pub prompt_decision: String,
    /// Broadcast channel capacity before slow subscribers start lagging.
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
            channel: default_channel(),
            prompt_decision: default_prompt_decision(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_data_dir() -> String {
    "data/notifications".to_string()
}

fn default_channel() -> String {
    "broadcast".to_string()
}

fn default_prompt_decision() -> String {
    "granted".to_string()
}

fn default_broadcast_capacity() -> usize {
    256
}
