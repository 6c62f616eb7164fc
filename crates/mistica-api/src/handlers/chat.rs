//! Assistant chat handlers.

use axum::Json;
use axum::extract::State;

use mistica_entity::chat::ChatMessage;

use crate::dto::request::{self, ChatRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/chat/greeting
pub async fn greeting(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<ChatMessage>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.chat_service.greeting())))
}

/// POST /api/chat
pub async fn send(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatMessage>>, ApiError> {
    request::validate(&req)?;
    Ok(Json(ApiResponse::ok(state.chat_service.reply(&req.message))))
}
