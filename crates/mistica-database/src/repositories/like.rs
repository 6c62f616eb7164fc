//! Post like repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mistica_core::error::{AppError, ErrorKind};
use mistica_core::result::AppResult;

/// Repository for community post likes.
#[derive(Debug, Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    /// Create a new like repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether `user_id` has liked `post_id`.
    pub async fn exists(&self, user_id: Uuid, post_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM post_likes WHERE user_id = $1 AND post_id = $2)",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check like", e))
    }

    /// Place a like. Idempotent: re-liking is a no-op.
    pub async fn insert(&self, user_id: Uuid, post_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO post_likes (user_id, post_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, post_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert like", e))?;
        Ok(())
    }

    /// Withdraw a like. Removing an absent like is a no-op.
    pub async fn delete(&self, user_id: Uuid, post_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM post_likes WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete like", e))?;
        Ok(())
    }
}
