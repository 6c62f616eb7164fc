//! Notification record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::NotificationCategory;
use super::event::NotificationEvent;

/// One notification entry in a user's cached list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Unique identifier, generated at creation time.
    ///
    /// UUIDv7: a millisecond timestamp followed by random bits, so ids
    /// are unique within a list by construction and never collide with
    /// a previously removed record.
    pub id: Uuid,
    /// Origin domain of the event.
    pub category: NotificationCategory,
    /// Nature of the event.
    pub event: NotificationEvent,
    /// Display title.
    pub title: String,
    /// Display body.
    pub body: String,
    /// Optional deep-link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Whether the user has read this notification.
    pub read: bool,
    /// When the notification was created. Immutable.
    pub created_at: DateTime<Utc>,
    /// Related entity ids, informational only — never validated against
    /// the entities still existing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<NotificationContext>,
}

impl NotificationRecord {
    /// Construct a fresh unread record with a new id and timestamp.
    pub fn new(
        category: NotificationCategory,
        event: NotificationEvent,
        title: impl Into<String>,
        body: impl Into<String>,
        link: Option<String>,
        context: Option<NotificationContext>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            category,
            event,
            title: title.into(),
            body: body.into(),
            link,
            read: false,
            created_at: Utc::now(),
            context,
        }
    }
}

/// Structured payload referencing the entities a notification is about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationContext {
    /// Related post id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<Uuid>,
    /// Related course module id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<Uuid>,
    /// The user whose action triggered the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unread() {
        let rec = NotificationRecord::new(
            NotificationCategory::Feed,
            NotificationEvent::Created,
            "Novo post",
            "Conteúdo X",
            None,
            None,
        );
        assert!(!rec.read);
    }

    #[test]
    fn test_ids_are_unique() {
        let mk = || {
            NotificationRecord::new(
                NotificationCategory::Feed,
                NotificationEvent::Created,
                "t",
                "b",
                None,
                None,
            )
        };
        let a = mk();
        let b = mk();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_roundtrip() {
        let rec = NotificationRecord::new(
            NotificationCategory::Community,
            NotificationEvent::Liked,
            "Curtida",
            "Alguém curtiu seu post",
            Some("/comunidade".to_string()),
            Some(NotificationContext {
                post_id: Some(Uuid::new_v4()),
                module_id: None,
                actor_id: Some(Uuid::new_v4()),
            }),
        );
        let json = serde_json::to_string(&rec).unwrap();
        let back: NotificationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, rec.id);
        assert_eq!(back.category, NotificationCategory::Community);
        assert_eq!(back.event, NotificationEvent::Liked);
        assert_eq!(back.link.as_deref(), Some("/comunidade"));
    }
}
