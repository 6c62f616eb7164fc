//! Chat message model for the assistant placeholder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The member.
    User,
    /// The assistant.
    Assistant,
}

/// One message in an assistant conversation.
///
/// Messages are not persisted; the assistant backend is stubbed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message identifier.
    pub id: Uuid,
    /// Message author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
    /// When the message was produced.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message timestamped now.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
