//! Community post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mistica_core::error::{AppError, ErrorKind};
use mistica_core::result::AppResult;
use mistica_core::types::pagination::{PageRequest, PageResponse};
use mistica_entity::community::{CommunityPost, CommunityPostView, NewCommunityPost};

/// Column list for the post view: author join plus like/comment aggregates
/// and the requesting user's own like state ($1 is the viewer).
const VIEW_COLUMNS: &str = "p.id, p.author_id, p.content, p.image_url, p.created_at, \
     u.display_name AS author_display_name, u.avatar_url AS author_avatar_url, \
     u.role_title AS author_role_title, \
     (SELECT COUNT(*) FROM post_likes l WHERE l.post_id = p.id) AS like_count, \
     (SELECT COUNT(*) FROM post_comments c WHERE c.post_id = p.id) AS comment_count, \
     EXISTS(SELECT 1 FROM post_likes l WHERE l.post_id = p.id AND l.user_id = $1) AS liked_by_me";

/// Repository for community wall posts.
#[derive(Debug, Clone)]
pub struct CommunityRepository {
    pool: PgPool,
}

impl CommunityRepository {
    /// Create a new community repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List community posts newest-first, as seen by `viewer`.
    pub async fn find_all(
        &self,
        viewer: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CommunityPostView>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM community_posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count community posts", e)
            })?;

        let posts = sqlx::query_as::<_, CommunityPostView>(&format!(
            "SELECT {VIEW_COLUMNS} FROM community_posts p \
             JOIN users u ON u.id = p.author_id \
             ORDER BY p.created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(viewer)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list community posts", e)
        })?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find a raw community post (author lookup for notifications).
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CommunityPost>> {
        sqlx::query_as::<_, CommunityPost>("SELECT * FROM community_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find community post", e)
            })
    }

    /// Create a community post.
    pub async fn create(
        &self,
        author_id: Uuid,
        post: &NewCommunityPost,
    ) -> AppResult<CommunityPost> {
        sqlx::query_as::<_, CommunityPost>(
            "INSERT INTO community_posts (author_id, content, image_url) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(author_id)
        .bind(&post.content)
        .bind(&post.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create community post", e)
        })
    }
}
