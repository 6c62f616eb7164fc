//! Feed post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mistica_core::error::{AppError, ErrorKind};
use mistica_core::result::AppResult;
use mistica_core::types::pagination::{PageRequest, PageResponse};
use mistica_entity::feed::{FeedPost, FeedPostWithAuthor, NewFeedPost};

/// Column list for the author join.
const WITH_AUTHOR: &str = "p.id, p.author_id, p.kind, p.title, p.content, p.image_url, \
     p.created_at, u.display_name AS author_display_name, \
     u.avatar_url AS author_avatar_url, u.role_title AS author_role_title";

/// Repository for feed post operations.
#[derive(Debug, Clone)]
pub struct FeedRepository {
    pool: PgPool,
}

impl FeedRepository {
    /// Create a new feed repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List feed posts newest-first with author attributes.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<FeedPostWithAuthor>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feed_posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count feed posts", e)
            })?;

        let posts = sqlx::query_as::<_, FeedPostWithAuthor>(&format!(
            "SELECT {WITH_AUTHOR} FROM feed_posts p \
             JOIN users u ON u.id = p.author_id \
             ORDER BY p.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list feed posts", e))?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find a single feed post with author attributes.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FeedPostWithAuthor>> {
        sqlx::query_as::<_, FeedPostWithAuthor>(&format!(
            "SELECT {WITH_AUTHOR} FROM feed_posts p \
             JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find feed post", e))
    }

    /// Publish a new feed post.
    pub async fn create(&self, author_id: Uuid, post: &NewFeedPost) -> AppResult<FeedPost> {
        sqlx::query_as::<_, FeedPost>(
            "INSERT INTO feed_posts (author_id, kind, title, content, image_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(author_id)
        .bind(&post.kind)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create feed post", e))
    }
}
