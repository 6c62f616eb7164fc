//! Feed post entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A post in the members' feed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedPost {
    /// Unique post identifier.
    pub id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Post kind (stored as text; see [`super::FeedPostKind`]).
    pub kind: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Optional cover image URL.
    pub image_url: Option<String>,
    /// When the post was published.
    pub created_at: DateTime<Utc>,
}

/// A feed post joined with its author's display attributes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedPostWithAuthor {
    /// Unique post identifier.
    pub id: Uuid,
    /// The authoring user.
    pub author_id: Uuid,
    /// Post kind.
    pub kind: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Optional cover image URL.
    pub image_url: Option<String>,
    /// When the post was published.
    pub created_at: DateTime<Utc>,
    /// Author display name.
    pub author_display_name: Option<String>,
    /// Author avatar URL.
    pub author_avatar_url: Option<String>,
    /// Author role/title.
    pub author_role_title: Option<String>,
}

/// Data required to publish a feed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeedPost {
    /// Post kind.
    pub kind: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Optional cover image URL.
    pub image_url: Option<String>,
}
