//! Community wall handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use mistica_core::types::pagination::PageResponse;
use mistica_entity::community::{
    CommentWithAuthor, CommunityPost, CommunityPostView, NewCommunityPost, PostComment,
};

use crate::dto::request::{self, AddCommentRequest, CreateCommunityPostRequest};
use crate::dto::response::{ApiResponse, LikeResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/community/posts
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<CommunityPostView>>>, ApiError> {
    let page = state
        .community_service
        .list(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/community/posts
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCommunityPostRequest>,
) -> Result<Json<ApiResponse<CommunityPost>>, ApiError> {
    request::validate(&req)?;

    let post = state
        .community_service
        .create_post(
            &auth,
            NewCommunityPost {
                content: req.content,
                image_url: req.image_url,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// POST /api/community/posts/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LikeResponse>>, ApiError> {
    let liked = state.community_service.toggle_like(&auth, id).await?;
    Ok(Json(ApiResponse::ok(LikeResponse { liked })))
}

/// GET /api/community/posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CommentWithAuthor>>>, ApiError> {
    let comments = state.community_service.comments(id).await?;
    Ok(Json(ApiResponse::ok(comments)))
}

/// POST /api/community/posts/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AddCommentRequest>,
) -> Result<Json<ApiResponse<PostComment>>, ApiError> {
    request::validate(&req)?;

    let comment = state
        .community_service
        .add_comment(&auth, id, &req.content)
        .await?;
    Ok(Json(ApiResponse::ok(comment)))
}
