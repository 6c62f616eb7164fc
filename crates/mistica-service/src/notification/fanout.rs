//! Delivers notifications into per-user stores.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use mistica_database::repositories::user::UserRepository;
use mistica_entity::feed::{FeedPost, FeedPostKind};
use mistica_entity::notification::{
    NotificationCategory, NotificationContext, NotificationEvent,
};
use mistica_notification::NotificationCenter;

use super::rules;

/// Fans application events out into recipients' notification stores.
///
/// Delivery is a best-effort side channel: failures to resolve the
/// audience or to write a store are logged and never surfaced to the
/// operation that triggered them.
#[derive(Debug, Clone)]
pub struct Notifier {
    user_repo: Arc<UserRepository>,
    center: Arc<NotificationCenter>,
}

impl Notifier {
    /// Create a new notifier.
    pub fn new(user_repo: Arc<UserRepository>, center: Arc<NotificationCenter>) -> Self {
        Self { user_repo, center }
    }

    /// Announce a new feed post to every active user except its author.
    pub async fn feed_post_published(&self, actor: Uuid, post: &FeedPost) {
        let active = match self.user_repo.list_active_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "failed to resolve feed notification audience");
                return;
            }
        };

        let title = match FeedPostKind::parse(&post.kind) {
            Ok(FeedPostKind::Post) => "Novo post no feed",
            Ok(FeedPostKind::Notice) => "Novo aviso",
            Ok(FeedPostKind::Update) => "Atualização publicada",
            Err(_) => "Novo post no feed",
        };
        let context = NotificationContext {
            post_id: Some(post.id),
            module_id: None,
            actor_id: Some(actor),
        };

        let audience = rules::broadcast_audience(&active, actor);
        debug!(post_id = %post.id, recipients = audience.len(), "feed post fan-out");
        for user_id in audience {
            self.deliver(
                user_id,
                NotificationCategory::Feed,
                NotificationEvent::Created,
                title,
                &post.title,
                Some("/feed".to_string()),
                Some(context.clone()),
            )
            .await;
        }
    }

    /// Tell a community post's author someone liked their post.
    pub async fn post_liked(&self, actor: Uuid, actor_name: &str, post_author: Uuid, post_id: Uuid) {
        let Some(recipient) = rules::interaction_target(post_author, actor) else {
            return;
        };
        self.deliver(
            recipient,
            NotificationCategory::Community,
            NotificationEvent::Liked,
            "Curtida",
            format!("{actor_name} curtiu seu post"),
            Some("/comunidade".to_string()),
            Some(NotificationContext {
                post_id: Some(post_id),
                module_id: None,
                actor_id: Some(actor),
            }),
        )
        .await;
    }

    /// Tell a community post's author someone commented on their post.
    pub async fn post_commented(
        &self,
        actor: Uuid,
        actor_name: &str,
        post_author: Uuid,
        post_id: Uuid,
    ) {
        let Some(recipient) = rules::interaction_target(post_author, actor) else {
            return;
        };
        self.deliver(
            recipient,
            NotificationCategory::Community,
            NotificationEvent::Commented,
            "Novo comentário",
            format!("{actor_name} comentou no seu post"),
            Some("/comunidade".to_string()),
            Some(NotificationContext {
                post_id: Some(post_id),
                module_id: None,
                actor_id: Some(actor),
            }),
        )
        .await;
    }

    #[allow(clippy::too_many_arguments)]
    async fn deliver(
        &self,
        user_id: Uuid,
        category: NotificationCategory,
        event: NotificationEvent,
        title: impl Into<String>,
        body: impl Into<String>,
        link: Option<String>,
        context: Option<NotificationContext>,
    ) {
        let store = self.center.store_for(user_id).await;
        store
            .lock()
            .await
            .add(category, event, title, body, link, context)
            .await;
    }
}
