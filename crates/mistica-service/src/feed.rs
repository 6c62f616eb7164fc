//! Feed post use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mistica_core::error::AppError;
use mistica_core::result::AppResult;
use mistica_core::types::pagination::{PageRequest, PageResponse};
use mistica_database::repositories::feed::FeedRepository;
use mistica_entity::feed::{FeedPost, FeedPostKind, FeedPostWithAuthor, NewFeedPost};

use crate::context::RequestContext;
use crate::notification::Notifier;

/// Manages the members' feed.
#[derive(Debug, Clone)]
pub struct FeedService {
    feed_repo: Arc<FeedRepository>,
    notifier: Notifier,
}

impl FeedService {
    /// Create a new feed service.
    pub fn new(feed_repo: Arc<FeedRepository>, notifier: Notifier) -> Self {
        Self { feed_repo, notifier }
    }

    /// List feed posts newest-first.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<FeedPostWithAuthor>> {
        self.feed_repo.find_all(&page).await
    }

    /// Fetch one feed post.
    pub async fn get(&self, id: Uuid) -> AppResult<FeedPostWithAuthor> {
        self.feed_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Feed post not found"))
    }

    /// Publish a feed post and notify every other active member.
    ///
    /// The kind string is validated before insert so unknown values are
    /// rejected rather than stored.
    pub async fn publish(&self, ctx: &RequestContext, mut post: NewFeedPost) -> AppResult<FeedPost> {
        let kind = FeedPostKind::parse(&post.kind)?;
        post.kind = kind.as_str().to_string();

        if post.title.trim().is_empty() {
            return Err(AppError::validation("Post title must not be empty"));
        }

        let created = self.feed_repo.create(ctx.user_id, &post).await?;
        info!(post_id = %created.id, kind = %kind, "Feed post published");

        self.notifier.feed_post_published(ctx.user_id, &created).await;
        Ok(created)
    }
}
