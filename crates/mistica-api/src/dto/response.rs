//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mistica_core::traits::push::PushPermission;
use mistica_entity::notification::NotificationRecord;
use mistica_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User info for responses. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name as shown next to posts.
    pub display_name: String,
    /// Avatar URL.
    pub avatar_url: Option<String>,
    /// Role/title line.
    pub role_title: Option<String>,
    /// Membership purchase date.
    pub purchase_date: Option<DateTime<Utc>>,
    /// Account creation date.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            display_name: user.visible_name().to_string(),
            avatar_url: user.avatar_url.clone(),
            role_title: user.role_title.clone(),
            purchase_date: user.purchase_date,
            created_at: user.created_at,
        }
    }
}

/// Login/signup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// The notification store surface exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    /// Records, newest first.
    pub notifications: Vec<NotificationRecord>,
    /// Number of unread records.
    pub unread_count: usize,
    /// Current push permission state.
    pub push_permission: PushPermission,
}

/// Outcome of a push permission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionResponse {
    /// Whether pushes may be shown now.
    pub granted: bool,
    /// The permission state after the request.
    pub permission: PushPermission,
}

/// Like toggle outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    /// Whether the post is liked by the caller after the toggle.
    pub liked: bool,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Server version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_user_response_never_leaks_password() {
        let user = User {
            id: Uuid::new_v4(),
            email: "luna@mistica.example".to_string(),
            password: "supersecret".to_string(),
            display_name: Some("Luna".to_string()),
            avatar_url: None,
            role_title: None,
            is_active: true,
            purchase_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();
        assert!(!json.contains("supersecret"));
        assert!(json.contains("Luna"));
    }
}
