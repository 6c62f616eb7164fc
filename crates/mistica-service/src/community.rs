//! Community wall use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mistica_core::error::AppError;
use mistica_core::result::AppResult;
use mistica_core::types::pagination::{PageRequest, PageResponse};
use mistica_database::repositories::comment::CommentRepository;
use mistica_database::repositories::community::CommunityRepository;
use mistica_database::repositories::like::LikeRepository;
use mistica_entity::community::{
    CommentWithAuthor, CommunityPost, CommunityPostView, NewCommunityPost, PostComment,
};

use crate::context::RequestContext;
use crate::notification::Notifier;

/// Manages community wall posts, likes, and comments.
#[derive(Debug, Clone)]
pub struct CommunityService {
    community_repo: Arc<CommunityRepository>,
    like_repo: Arc<LikeRepository>,
    comment_repo: Arc<CommentRepository>,
    notifier: Notifier,
}

impl CommunityService {
    /// Create a new community service.
    pub fn new(
        community_repo: Arc<CommunityRepository>,
        like_repo: Arc<LikeRepository>,
        comment_repo: Arc<CommentRepository>,
        notifier: Notifier,
    ) -> Self {
        Self {
            community_repo,
            like_repo,
            comment_repo,
            notifier,
        }
    }

    /// List wall posts newest-first, with like state as seen by the caller.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<CommunityPostView>> {
        self.community_repo.find_all(ctx.user_id, &page).await
    }

    /// Create a wall post.
    pub async fn create_post(
        &self,
        ctx: &RequestContext,
        post: NewCommunityPost,
    ) -> AppResult<CommunityPost> {
        if post.content.trim().is_empty() {
            return Err(AppError::validation("Post content must not be empty"));
        }
        let created = self.community_repo.create(ctx.user_id, &post).await?;
        info!(post_id = %created.id, "Community post created");
        Ok(created)
    }

    /// Toggle the caller's like on a post. Returns whether the post is
    /// liked after the call. Liking another member's post notifies them.
    pub async fn toggle_like(&self, ctx: &RequestContext, post_id: Uuid) -> AppResult<bool> {
        let post = self.require_post(post_id).await?;

        if self.like_repo.exists(ctx.user_id, post_id).await? {
            self.like_repo.delete(ctx.user_id, post_id).await?;
            return Ok(false);
        }

        self.like_repo.insert(ctx.user_id, post_id).await?;
        self.notifier
            .post_liked(ctx.user_id, &ctx.display_name, post.author_id, post_id)
            .await;
        Ok(true)
    }

    /// List a post's comments oldest-first.
    pub async fn comments(&self, post_id: Uuid) -> AppResult<Vec<CommentWithAuthor>> {
        self.require_post(post_id).await?;
        self.comment_repo.find_by_post(post_id).await
    }

    /// Add a comment. Commenting on another member's post notifies them.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        content: &str,
    ) -> AppResult<PostComment> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Comment must not be empty"));
        }
        let post = self.require_post(post_id).await?;

        let comment = self.comment_repo.create(post_id, ctx.user_id, content).await?;
        self.notifier
            .post_commented(ctx.user_id, &ctx.display_name, post.author_id, post_id)
            .await;
        Ok(comment)
    }

    async fn require_post(&self, post_id: Uuid) -> AppResult<CommunityPost> {
        self.community_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Community post not found"))
    }
}
