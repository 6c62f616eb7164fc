//! Post comment entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment on a community post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostComment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The commented post.
    pub post_id: Uuid,
    /// The commenting user.
    pub author_id: Uuid,
    /// Comment text.
    pub content: String,
    /// When the comment was written.
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author's display attributes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentWithAuthor {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The commented post.
    pub post_id: Uuid,
    /// The commenting user.
    pub author_id: Uuid,
    /// Comment text.
    pub content: String,
    /// When the comment was written.
    pub created_at: DateTime<Utc>,
    /// Author display name.
    pub author_display_name: Option<String>,
    /// Author avatar URL.
    pub author_avatar_url: Option<String>,
}
