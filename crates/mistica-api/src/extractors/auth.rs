//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, validates the session, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use mistica_core::error::AppError;
use mistica_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Context for the authenticated user.
    pub context: RequestContext,
    /// The raw session token, kept for logout.
    pub token: String,
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let session = state.session_manager.validate(token).await?;
        let user = state.session_manager.user_for_session(&session).await?;
        if !user.is_active {
            return Err(AppError::authentication("Account is deactivated").into());
        }

        Ok(AuthUser {
            context: RequestContext::for_user(&user),
            token: token.to_string(),
        })
    }
}
