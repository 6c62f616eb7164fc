//! Auth handlers — signup, login, logout, me.

use axum::Json;
use axum::extract::State;

use mistica_auth::session::manager::LoginResult;
use mistica_entity::user::CreateUser;

use crate::dto::request::{self, LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, MessageResponse, SessionResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

fn session_response(result: LoginResult) -> SessionResponse {
    SessionResponse {
        token: result.session.token,
        expires_at: result.session.expires_at,
        user: UserResponse::from(&result.user),
    }
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<SessionResponse>>, ApiError> {
    request::validate(&req)?;

    let result = state
        .session_manager
        .signup(CreateUser {
            email: req.email,
            password: req.password,
            display_name: req.display_name,
        })
        .await?;

    Ok(Json(ApiResponse::ok(session_response(result))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<SessionResponse>>, ApiError> {
    request::validate(&req)?;

    let result = state
        .session_manager
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(session_response(result))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.logout(&auth.token).await;
    // Dropping the in-memory store mirrors the user-change reset: the
    // next login re-initializes from persisted data.
    state.notification_center.detach(auth.user_id);

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}
