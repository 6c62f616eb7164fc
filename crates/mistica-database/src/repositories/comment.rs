//! Post comment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mistica_core::error::{AppError, ErrorKind};
use mistica_core::result::AppResult;
use mistica_entity::community::{CommentWithAuthor, PostComment};

/// Repository for community post comments.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a post's comments oldest-first with author attributes.
    pub async fn find_by_post(&self, post_id: Uuid) -> AppResult<Vec<CommentWithAuthor>> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.post_id, c.author_id, c.content, c.created_at, \
                    u.display_name AS author_display_name, \
                    u.avatar_url AS author_avatar_url \
             FROM post_comments c \
             JOIN users u ON u.id = c.author_id \
             WHERE c.post_id = $1 ORDER BY c.created_at ASC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// Add a comment to a post.
    pub async fn create(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> AppResult<PostComment> {
        sqlx::query_as::<_, PostComment>(
            "INSERT INTO post_comments (post_id, author_id, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(post_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }
}
