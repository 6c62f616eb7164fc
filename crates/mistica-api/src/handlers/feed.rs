//! Feed handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use mistica_core::types::pagination::PageResponse;
use mistica_entity::feed::{FeedPost, FeedPostWithAuthor, NewFeedPost};

use crate::dto::request::{self, CreateFeedPostRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/feed
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<FeedPostWithAuthor>>>, ApiError> {
    let page = state.feed_service.list(params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/feed/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FeedPostWithAuthor>>, ApiError> {
    let post = state.feed_service.get(id).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// POST /api/feed
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFeedPostRequest>,
) -> Result<Json<ApiResponse<FeedPost>>, ApiError> {
    request::validate(&req)?;

    let post = state
        .feed_service
        .publish(
            &auth,
            NewFeedPost {
                kind: req.kind,
                title: req.title,
                content: req.content,
                image_url: req.image_url,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(post)))
}
