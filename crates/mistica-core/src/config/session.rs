//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session token cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session time-to-live in hours.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
    /// Maximum number of cached sessions.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_ttl_hours() -> u64 {
    24
}

fn default_max_sessions() -> u64 {
    10_000
}
