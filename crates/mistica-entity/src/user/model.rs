//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered member of the Biblioteca Mística.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email, unique.
    pub email: String,
    /// Password, stored in plain text.
    ///
    /// Deliberate prototype limitation: the membership platform ships
    /// without password hashing and the login path compares this field
    /// verbatim. Never serialized outward.
    #[serde(skip_serializing)]
    pub password: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Profile picture URL.
    pub avatar_url: Option<String>,
    /// Displayed role/title inside the community.
    pub role_title: Option<String>,
    /// Whether the account is active and allowed to log in.
    pub is_active: bool,
    /// When the membership was purchased.
    pub purchase_date: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The name shown next to the user's posts and comments.
    ///
    /// Falls back to the local part of the email when no display name
    /// was set, matching signup behavior.
    pub fn visible_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

/// Data required to create a new user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Plain-text password (prototype limitation, see [`User::password`]).
    pub password: String,
    /// Display name; defaults to the email's local part when absent.
    pub display_name: Option<String>,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub display_name: Option<String>,
    /// New profile picture URL.
    pub avatar_url: Option<String>,
    /// New role/title.
    pub role_title: Option<String>,
}

/// Author attributes joined onto posts and comments.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub display_name: Option<String>,
    /// Profile picture URL.
    pub avatar_url: Option<String>,
    /// Displayed role/title.
    pub role_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(display_name: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "luna@mistica.example".to_string(),
            password: "secret".to_string(),
            display_name: display_name.map(String::from),
            avatar_url: None,
            role_title: None,
            is_active: true,
            purchase_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_visible_name_prefers_display_name() {
        assert_eq!(make_user(Some("Luna")).visible_name(), "Luna");
    }

    #[test]
    fn test_visible_name_falls_back_to_email_local_part() {
        assert_eq!(make_user(None).visible_name(), "luna");
        assert_eq!(make_user(Some("")).visible_name(), "luna");
    }
}
