//! Post like entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A like placed by a user on a community post.
///
/// One row per (user, post) pair; toggling a like deletes the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostLike {
    /// The liking user.
    pub user_id: Uuid,
    /// The liked post.
    pub post_id: Uuid,
    /// When the like was placed.
    pub created_at: DateTime<Utc>,
}
