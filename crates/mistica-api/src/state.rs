//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use mistica_auth::session::manager::SessionManager;
use mistica_core::config::AppConfig;
use mistica_notification::{BroadcastPushChannel, NotificationCenter};
use mistica_service::chat::ChatService;
use mistica_service::community::CommunityService;
use mistica_service::feed::FeedService;
use mistica_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,

    /// Per-user notification stores.
    pub notification_center: Arc<NotificationCenter>,
    /// Push broadcast channel, when the push capability is configured.
    /// Backs the SSE stream endpoint.
    pub push_broadcast: Option<Arc<BroadcastPushChannel>>,

    /// Feed service.
    pub feed_service: Arc<FeedService>,
    /// Community wall service.
    pub community_service: Arc<CommunityService>,
    /// Profile service.
    pub user_service: Arc<UserService>,
    /// Assistant chat placeholder.
    pub chat_service: Arc<ChatService>,
}
