//! Route definitions for the Biblioteca Mística HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(feed_routes())
        .merge(community_routes())
        .merge(notification_routes())
        .merge(chat_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Profile self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_profile))
        .route("/users/me", put(handlers::user::update_profile))
}

/// Members' feed
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/feed", get(handlers::feed::list))
        .route("/feed", post(handlers::feed::create))
        .route("/feed/{id}", get(handlers::feed::get))
}

/// Community wall: posts, likes, comments
fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/community/posts", get(handlers::community::list))
        .route("/community/posts", post(handlers::community::create))
        .route(
            "/community/posts/{id}/like",
            post(handlers::community::toggle_like),
        )
        .route(
            "/community/posts/{id}/comments",
            get(handlers::community::list_comments),
        )
        .route(
            "/community/posts/{id}/comments",
            post(handlers::community::add_comment),
        )
}

/// Per-user notification store and SSE stream
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route("/notifications", delete(handlers::notification::clear_all))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/permission",
            post(handlers::notification::request_permission),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::remove),
        )
        .route("/notifications/stream", get(handlers::notification::stream))
}

/// Assistant chat placeholder
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(handlers::chat::send))
        .route("/chat/greeting", get(handlers::chat::greeting))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
