//! In-memory TTL cache of active sessions.

use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mistica_core::config::session::SessionConfig;

/// An authenticated session bound to one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The opaque bearer token.
    pub token: String,
    /// The authenticated user.
    pub user_id: Uuid,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session has passed its expiry time.
    ///
    /// The cache TTL normally evicts expired sessions, but the wall-clock
    /// check also covers entries still resident after their deadline.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Token-keyed cache of active sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Cache<String, Session>,
    ttl: chrono::Duration,
}

impl SessionStore {
    /// Create a session store from configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_live(Duration::from_secs(config.ttl_hours * 3600))
            .build();

        Self {
            cache,
            ttl: chrono::Duration::hours(config.ttl_hours as i64),
        }
    }

    /// Open a session for a user under the given token.
    pub async fn insert(&self, token: String, user_id: Uuid) -> Session {
        let now = Utc::now();
        let session = Session {
            token: token.clone(),
            user_id,
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.cache.insert(token, session.clone()).await;
        session
    }

    /// Look up a live session by token. Expired sessions are treated as
    /// absent and dropped.
    pub async fn get(&self, token: &str) -> Option<Session> {
        match self.cache.get(token).await {
            Some(session) if session.is_expired() => {
                self.cache.remove(token).await;
                None
            }
            other => other,
        }
    }

    /// Close a session. Closing an unknown token is a no-op.
    pub async fn remove(&self, token: &str) {
        self.cache.remove(token).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> SessionStore {
        SessionStore::new(&SessionConfig {
            ttl_hours: 1,
            max_sessions: 100,
        })
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = make_store();
        let user = Uuid::new_v4();
        let session = store.insert("tok".to_string(), user).await;
        assert_eq!(session.user_id, user);

        let found = store.get("tok").await.unwrap();
        assert_eq!(found.user_id, user);
    }

    #[tokio::test]
    async fn test_unknown_token_absent() {
        let store = make_store();
        assert!(store.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_remove_closes_session() {
        let store = make_store();
        store.insert("tok".to_string(), Uuid::new_v4()).await;
        store.remove("tok").await;
        assert!(store.get("tok").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_treated_as_absent() {
        let store = make_store();
        let mut session = store.insert("tok".to_string(), Uuid::new_v4()).await;
        session.expires_at = Utc::now() - chrono::Duration::seconds(1);
        store.cache.insert("tok".to_string(), session).await;

        assert!(store.get("tok").await.is_none());
    }
}
