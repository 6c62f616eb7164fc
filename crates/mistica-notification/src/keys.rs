//! Key-value key builders for the notification subsystem.
//!
//! Centralising key construction prevents typos and makes every key the
//! subsystem uses easy to find.

use uuid::Uuid;

/// Prefix applied to all notification keys.
const PREFIX: &str = "mistica";

/// Key under which a user's notification list is persisted.
pub fn notifications(user_id: Uuid) -> String {
    format!("{PREFIX}:notifications:{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_key_scoped_per_user() {
        let id = Uuid::nil();
        assert_eq!(
            notifications(id),
            "mistica:notifications:00000000-0000-0000-0000-000000000000"
        );
        assert_ne!(notifications(Uuid::new_v4()), notifications(Uuid::new_v4()));
    }
}
