//! Biblioteca Mística server — membership platform backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use mistica_core::config::AppConfig;
use mistica_core::error::AppError;
use mistica_core::traits::push::{PushChannel, PushPermission};
use mistica_core::traits::storage::KeyValueStore;
use mistica_notification::{
    BroadcastPushChannel, FileKeyValueStore, MemoryKeyValueStore, NoopPushChannel,
    NotificationCenter,
};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("MISTICA_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Biblioteca Mística v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = mistica_database::connection::create_pool(&config.database).await?;
    mistica_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(mistica_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let feed_repo = Arc::new(mistica_database::repositories::feed::FeedRepository::new(
        db_pool.clone(),
    ));
    let community_repo = Arc::new(
        mistica_database::repositories::community::CommunityRepository::new(db_pool.clone()),
    );
    let like_repo = Arc::new(mistica_database::repositories::like::LikeRepository::new(
        db_pool.clone(),
    ));
    let comment_repo = Arc::new(
        mistica_database::repositories::comment::CommentRepository::new(db_pool.clone()),
    );

    // ── Step 3: Sessions ─────────────────────────────────────────
    let session_manager = Arc::new(mistica_auth::session::manager::SessionManager::new(
        Arc::clone(&user_repo),
        config.session.clone(),
    ));

    // ── Step 4: Notification subsystem ───────────────────────────
    let kv: Arc<dyn KeyValueStore> = match config.notifications.backend.as_str() {
        "file" => {
            tokio::fs::create_dir_all(&config.notifications.data_dir)
                .await
                .map_err(|e| {
                    AppError::storage(format!(
                        "Failed to create notification data dir '{}': {e}",
                        config.notifications.data_dir
                    ))
                })?;
            Arc::new(FileKeyValueStore::new(&config.notifications.data_dir))
        }
        _ => Arc::new(MemoryKeyValueStore::new()),
    };
    tracing::info!(
        backend = %config.notifications.backend,
        channel = %config.notifications.channel,
        "Notification subsystem initialized"
    );

    let (push, push_broadcast): (Arc<dyn PushChannel>, Option<Arc<BroadcastPushChannel>>) =
        match config.notifications.channel.as_str() {
            "broadcast" => {
                let channel = Arc::new(BroadcastPushChannel::new(
                    config.notifications.broadcast_capacity,
                    PushPermission::parse(&config.notifications.prompt_decision),
                ));
                (channel.clone(), Some(channel))
            }
            _ => (Arc::new(NoopPushChannel), None),
        };

    let notification_center = Arc::new(NotificationCenter::new(kv, push));

    // ── Step 5: Services ─────────────────────────────────────────
    let notifier = mistica_service::notification::Notifier::new(
        Arc::clone(&user_repo),
        Arc::clone(&notification_center),
    );
    let feed_service = Arc::new(mistica_service::feed::FeedService::new(
        Arc::clone(&feed_repo),
        notifier.clone(),
    ));
    let community_service = Arc::new(mistica_service::community::CommunityService::new(
        Arc::clone(&community_repo),
        Arc::clone(&like_repo),
        Arc::clone(&comment_repo),
        notifier,
    ));
    let user_service = Arc::new(mistica_service::user::UserService::new(Arc::clone(
        &user_repo,
    )));
    let chat_service = Arc::new(mistica_service::chat::ChatService::new());

    // ── Step 6: HTTP server ──────────────────────────────────────
    let app_state = mistica_api::AppState {
        config: Arc::new(config.clone()),
        session_manager,
        notification_center,
        push_broadcast,
        feed_service,
        community_service,
        user_service,
        chat_service,
    };

    let app = mistica_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Biblioteca Mística listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
