//! Profile use cases.

use std::sync::Arc;

use tracing::info;

use mistica_core::error::AppError;
use mistica_core::result::AppResult;
use mistica_database::repositories::user::UserRepository;
use mistica_entity::user::{UpdateProfile, User};

use crate::context::RequestContext;

/// Manages member profiles.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Create a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Fetch the caller's own profile.
    pub async fn profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Update the caller's own profile. Absent fields are left unchanged.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: UpdateProfile,
    ) -> AppResult<User> {
        if let Some(name) = &update.display_name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Display name must not be empty"));
            }
        }
        let user = self.user_repo.update_profile(ctx.user_id, &update).await?;
        info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }
}
