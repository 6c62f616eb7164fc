//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use mistica_core::error::AppError;
use mistica_core::result::AppResult;

/// Run derive-based validation, flattening failures into one message.
pub fn validate(req: &impl Validate) -> AppResult<()> {
    req.validate().map_err(|e| {
        let mut messages: Vec<String> = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let detail = errors
                    .first()
                    .and_then(|err| err.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {detail}")
            })
            .collect();
        messages.sort();
        AppError::validation(messages.join("; "))
    })
}

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Login email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 4, message = "must be at least 4 characters"))]
    pub password: String,
    /// Display name (defaults to the email's local part).
    pub display_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    pub display_name: Option<String>,
    /// New avatar URL.
    pub avatar_url: Option<String>,
    /// New role/title line.
    pub role_title: Option<String>,
}

/// Create feed post request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFeedPostRequest {
    /// Post kind: `"post"`, `"notice"`, or `"update"`.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Post title.
    #[validate(length(min = 1, max = 200, message = "must be 1 to 200 characters"))]
    pub title: String,
    /// Post body.
    #[validate(length(min = 1, message = "is required"))]
    pub content: String,
    /// Optional cover image URL.
    pub image_url: Option<String>,
}

fn default_kind() -> String {
    "post".to_string()
}

/// Create community post request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommunityPostRequest {
    /// Post text.
    #[validate(length(min = 1, max = 2000, message = "must be 1 to 2000 characters"))]
    pub content: String,
    /// Optional attached image URL.
    pub image_url: Option<String>,
}

/// Add comment request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCommentRequest {
    /// Comment text.
    #[validate(length(min = 1, max = 1000, message = "must be 1 to 1000 characters"))]
    pub content: String,
}

/// Chat message request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    /// The user's message.
    #[validate(length(min = 1, message = "is required"))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_rejects_bad_email() {
        let req = SignupRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
            display_name: None,
        };
        let err = validate(&req).unwrap_err();
        assert!(err.message.contains("email"));
    }

    #[test]
    fn test_signup_accepts_valid_input() {
        let req = SignupRequest {
            email: "maria@example.com".to_string(),
            password: "secret".to_string(),
            display_name: Some("Maria".to_string()),
        };
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn test_feed_post_kind_defaults() {
        let req: CreateFeedPostRequest =
            serde_json::from_str(r#"{"title": "t", "content": "c"}"#).unwrap();
        assert_eq!(req.kind, "post");
    }
}
