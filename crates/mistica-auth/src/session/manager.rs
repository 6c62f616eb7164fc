//! Session manager — signup, login, logout, validation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mistica_core::config::session::SessionConfig;
use mistica_core::error::AppError;
use mistica_database::repositories::user::UserRepository;
use mistica_entity::user::{CreateUser, User};

use super::store::{Session, SessionStore};
use super::token;

/// Outcome of a successful signup or login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// The freshly opened session.
    pub session: Session,
}

/// Manages the session lifecycle over the user repository and the
/// in-memory token cache.
#[derive(Debug, Clone)]
pub struct SessionManager {
    user_repo: Arc<UserRepository>,
    store: SessionStore,
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new(user_repo: Arc<UserRepository>, config: SessionConfig) -> Self {
        Self {
            user_repo,
            store: SessionStore::new(&config),
        }
    }

    /// Create a new account and open a session for it.
    ///
    /// The display name defaults to the email's local part when the
    /// caller leaves it empty.
    pub async fn signup(&self, mut new_user: CreateUser) -> Result<LoginResult, AppError> {
        new_user.email = new_user.email.trim().to_string();
        if new_user.display_name.as_deref().is_none_or(str::is_empty) {
            new_user.display_name = new_user
                .email
                .split('@')
                .next()
                .map(str::to_string);
        }

        let user = self.user_repo.create(&new_user).await?;
        info!(user_id = %user.id, "New account created");

        let session = self.open_session(user.id).await;
        Ok(LoginResult { user, session })
    }

    /// Authenticate with email and password, opening a session.
    ///
    /// Plain-text comparison by design (prototype limitation). The error
    /// message never reveals whether the email exists.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_email(email.trim())
            .await?
            .filter(|u| u.is_active && u.password == password)
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        info!(user_id = %user.id, "User logged in");

        let session = self.open_session(user.id).await;
        Ok(LoginResult { user, session })
    }

    /// Validate a bearer token, returning the live session.
    pub async fn validate(&self, token: &str) -> Result<Session, AppError> {
        self.store
            .get(token)
            .await
            .ok_or_else(|| AppError::authentication("Invalid or expired session"))
    }

    /// Close the session for a token. Unknown tokens are a no-op.
    pub async fn logout(&self, token: &str) {
        self.store.remove(token).await;
    }

    /// Load the user behind a session.
    pub async fn user_for_session(&self, session: &Session) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Session user no longer exists"))
    }

    async fn open_session(&self, user_id: Uuid) -> Session {
        self.store.insert(token::generate(), user_id).await
    }
}
