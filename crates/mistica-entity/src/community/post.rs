//! Community post entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A post on the community wall.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommunityPost {
    /// Unique post identifier.
    pub id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Post text.
    pub content: String,
    /// Optional attached image URL.
    pub image_url: Option<String>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// A community post joined with author attributes and like state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommunityPostView {
    /// Unique post identifier.
    pub id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Post text.
    pub content: String,
    /// Optional attached image URL.
    pub image_url: Option<String>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// Author display name.
    pub author_display_name: Option<String>,
    /// Author avatar URL.
    pub author_avatar_url: Option<String>,
    /// Author role/title.
    pub author_role_title: Option<String>,
    /// Total number of likes.
    pub like_count: i64,
    /// Total number of comments.
    pub comment_count: i64,
    /// Whether the requesting user has liked this post.
    pub liked_by_me: bool,
}

/// Data required to create a community post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCommunityPost {
    /// Post text.
    pub content: String,
    /// Optional attached image URL.
    pub image_url: Option<String>,
}
