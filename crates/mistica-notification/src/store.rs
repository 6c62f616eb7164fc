//! Per-user notification store.
//!
//! Caches a user's notification list in memory, mirrors every mutation
//! to the key-value backend, and emits best-effort push notifications
//! when permission allows. The store is a cache, not a system of
//! record: storage failures degrade to empty state instead of
//! propagating, and push failures never roll back a stored record.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use mistica_core::traits::push::{PushChannel, PushMessage, PushPermission};
use mistica_core::traits::storage::KeyValueStore;
use mistica_entity::notification::{
    NotificationCategory, NotificationContext, NotificationEvent, NotificationRecord,
};

use crate::keys;

/// Icon shown on push notifications.
const PUSH_ICON: &str = "/icon-192.png";

/// Notification state for one user session.
///
/// Records are kept newest-first. `unread_count` is recomputed from the
/// list after every mutation rather than adjusted incrementally, so it
/// can never drift.
#[derive(Debug)]
pub struct NotificationStore {
    user_id: Option<Uuid>,
    records: Vec<NotificationRecord>,
    unread_count: usize,
    permission: PushPermission,
    kv: Arc<dyn KeyValueStore>,
    push: Arc<dyn PushChannel>,
}

impl NotificationStore {
    /// Create a store with no active user. Every operation that needs a
    /// user is a no-op until `set_user` is called.
    pub fn new(kv: Arc<dyn KeyValueStore>, push: Arc<dyn PushChannel>) -> Self {
        Self {
            user_id: None,
            records: Vec::new(),
            unread_count: 0,
            permission: PushPermission::Default,
            kv,
            push,
        }
    }

    /// Create a store and immediately initialize it for `user_id`.
    pub async fn for_user(
        kv: Arc<dyn KeyValueStore>,
        push: Arc<dyn PushChannel>,
        user_id: Uuid,
    ) -> Self {
        let mut store = Self::new(kv, push);
        store.set_user(Some(user_id)).await;
        store
    }

    /// Switch the active user and re-initialize state.
    ///
    /// The previous user's records are dropped from memory before the
    /// new user's list is loaded, so two users' data never coexist.
    /// With `None` the store resets to empty/default state.
    pub async fn set_user(&mut self, user_id: Option<Uuid>) {
        self.user_id = user_id;
        self.records = Vec::new();
        self.unread_count = 0;
        self.permission = PushPermission::Default;

        let Some(user_id) = user_id else {
            return;
        };

        self.records = self.load(user_id).await;
        self.unread_count = Self::count_unread(&self.records);
        if self.push.is_available() {
            self.permission = self.push.permission();
        }
    }

    /// The active user, if any.
    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    /// The cached records, newest first.
    pub fn records(&self) -> &[NotificationRecord] {
        &self.records
    }

    /// Number of unread records.
    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// The permission state snapshotted at initialization or updated by
    /// `request_push_permission`.
    pub fn push_permission(&self) -> PushPermission {
        self.permission
    }

    /// Ask the platform for push permission.
    ///
    /// Returns whether pushes may be shown afterwards. `Granted` and
    /// `Denied` short-circuit without prompting; denied is terminal for
    /// the session. Only the `Default` state actually prompts, and this
    /// is the one suspending operation in the store.
    pub async fn request_push_permission(&mut self) -> bool {
        if !self.push.is_available() {
            return false;
        }
        match self.permission {
            PushPermission::Granted => true,
            PushPermission::Denied => false,
            PushPermission::Default => {
                let outcome = self.push.request_permission().await;
                self.permission = outcome;
                outcome == PushPermission::Granted
            }
        }
    }

    /// Create a record, prepend it, persist, and emit a push if
    /// permission is granted. Returns `None` when no user is active.
    pub async fn add(
        &mut self,
        category: NotificationCategory,
        event: NotificationEvent,
        title: impl Into<String>,
        body: impl Into<String>,
        link: Option<String>,
        context: Option<NotificationContext>,
    ) -> Option<NotificationRecord> {
        let user_id = self.user_id?;
        let record = NotificationRecord::new(category, event, title, body, link, context);

        self.records.insert(0, record.clone());
        self.persist(user_id).await;
        self.unread_count = Self::count_unread(&self.records);

        if self.permission == PushPermission::Granted {
            let message = PushMessage {
                user_id,
                title: record.title.clone(),
                body: record.body.clone(),
                icon: Some(PUSH_ICON.to_string()),
                tag: record.id.to_string(),
                link: record.link.clone(),
            };
            if let Err(e) = self.push.show(&message).await {
                debug!(user_id = %user_id, error = %e, "push emission failed");
            }
        }

        Some(record)
    }

    /// Mark one record read. Unknown ids are a no-op.
    pub async fn mark_read(&mut self, id: Uuid) {
        let Some(user_id) = self.user_id else {
            return;
        };
        let mut changed = false;
        for record in &mut self.records {
            if record.id == id && !record.read {
                record.read = true;
                changed = true;
            }
        }
        if changed {
            self.persist(user_id).await;
            self.unread_count = Self::count_unread(&self.records);
        }
    }

    /// Mark every record read.
    pub async fn mark_all_read(&mut self) {
        let Some(user_id) = self.user_id else {
            return;
        };
        for record in &mut self.records {
            record.read = true;
        }
        self.persist(user_id).await;
        self.unread_count = 0;
    }

    /// Delete one record. Unknown ids are a no-op.
    pub async fn remove(&mut self, id: Uuid) {
        let Some(user_id) = self.user_id else {
            return;
        };
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() != before {
            self.persist(user_id).await;
            self.unread_count = Self::count_unread(&self.records);
        }
    }

    /// Erase the user's persisted entry and reset in-memory state.
    /// No-op without an active user.
    pub async fn clear_all(&mut self) {
        let Some(user_id) = self.user_id else {
            return;
        };
        if let Err(e) = self.kv.remove(&keys::notifications(user_id)).await {
            warn!(user_id = %user_id, error = %e, "failed to clear persisted notifications");
        }
        self.records = Vec::new();
        self.unread_count = 0;
    }

    fn count_unread(records: &[NotificationRecord]) -> usize {
        records.iter().filter(|r| !r.read).count()
    }

    /// Load the persisted list. Missing or unreadable data yields an
    /// empty list; corruption is logged but never propagated.
    async fn load(&self, user_id: Uuid) -> Vec<NotificationRecord> {
        let key = keys::notifications(user_id);
        let raw = match self.kv.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "failed to read persisted notifications");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "discarding unparseable notification data");
                Vec::new()
            }
        }
    }

    /// Write the current list through to the backend. Failures are
    /// logged; the in-memory state stays authoritative for the session.
    async fn persist(&self, user_id: Uuid) {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "failed to serialize notifications");
                return;
            }
        };
        if let Err(e) = self.kv.set(&keys::notifications(user_id), &json).await {
            warn!(user_id = %user_id, error = %e, "failed to persist notifications");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mistica_core::error::AppError;
    use mistica_core::result::AppResult;

    use crate::backend::MemoryKeyValueStore;
    use crate::channel::{BroadcastPushChannel, NoopPushChannel};

    /// Backend that fails every operation except `get` of absent keys.
    #[derive(Debug)]
    struct FailingKv;

    #[async_trait]
    impl KeyValueStore for FailingKv {
        async fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::storage("backend offline"))
        }

        async fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::storage("backend offline"))
        }

        async fn remove(&self, _key: &str) -> AppResult<()> {
            Err(AppError::storage("backend offline"))
        }
    }

    async fn store_for(user_id: Uuid) -> NotificationStore {
        NotificationStore::for_user(
            Arc::new(MemoryKeyValueStore::new()),
            Arc::new(NoopPushChannel),
            user_id,
        )
        .await
    }

    async fn add_simple(store: &mut NotificationStore, title: &str) -> Option<NotificationRecord> {
        store
            .add(
                NotificationCategory::Feed,
                NotificationEvent::Created,
                title,
                "body",
                None,
                None,
            )
            .await
    }

    #[tokio::test]
    async fn test_fresh_user_starts_empty() {
        let store = store_for(Uuid::new_v4()).await;
        assert!(store.records().is_empty());
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.push_permission(), PushPermission::Default);
    }

    #[tokio::test]
    async fn test_add_prepends_newest_first() {
        let mut store = store_for(Uuid::new_v4()).await;
        add_simple(&mut store, "first").await.unwrap();
        add_simple(&mut store, "second").await.unwrap();
        add_simple(&mut store, "third").await.unwrap();

        assert_eq!(store.records().len(), 3);
        assert_eq!(store.records()[0].title, "third");
        assert_eq!(store.records()[2].title, "first");
        assert_eq!(store.unread_count(), 3);
    }

    #[tokio::test]
    async fn test_add_on_empty_store() {
        let mut store = store_for(Uuid::new_v4()).await;
        let rec = store
            .add(
                NotificationCategory::Feed,
                NotificationEvent::Created,
                "Novo post",
                "Conteúdo X",
                None,
                None,
            )
            .await
            .unwrap();
        assert!(!rec.read);
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.unread_count(), 1);
    }

    #[tokio::test]
    async fn test_add_without_user_is_none() {
        let mut store = NotificationStore::new(
            Arc::new(MemoryKeyValueStore::new()),
            Arc::new(NoopPushChannel),
        );
        assert!(add_simple(&mut store, "x").await.is_none());
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_unread_count_tracks_list_after_every_operation() {
        let mut store = store_for(Uuid::new_v4()).await;
        let a = add_simple(&mut store, "a").await.unwrap();
        let b = add_simple(&mut store, "b").await.unwrap();
        add_simple(&mut store, "c").await.unwrap();

        store.mark_read(a.id).await;
        assert_eq!(store.unread_count(), 2);

        store.remove(b.id).await;
        assert_eq!(store.unread_count(), 1);

        store.mark_all_read().await;
        assert_eq!(store.unread_count(), 0);

        let unread = store.records().iter().filter(|r| !r.read).count();
        assert_eq!(store.unread_count(), unread);
    }

    #[tokio::test]
    async fn test_mark_read_is_idempotent() {
        let mut store = store_for(Uuid::new_v4()).await;
        let rec = add_simple(&mut store, "a").await.unwrap();
        store.mark_read(rec.id).await;
        store.mark_read(rec.id).await;
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.records().len(), 1);
        assert!(store.records()[0].read);
    }

    #[tokio::test]
    async fn test_mark_read_unknown_id_is_noop() {
        let mut store = store_for(Uuid::new_v4()).await;
        add_simple(&mut store, "a").await.unwrap();
        store.mark_read(Uuid::new_v4()).await;
        assert_eq!(store.unread_count(), 1);
    }

    #[tokio::test]
    async fn test_remove_then_add_never_collides() {
        let mut store = store_for(Uuid::new_v4()).await;
        let old = add_simple(&mut store, "a").await.unwrap();
        store.remove(old.id).await;
        let fresh = add_simple(&mut store, "a").await.unwrap();
        assert_ne!(fresh.id, old.id);
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let mut store = store_for(Uuid::new_v4()).await;
        add_simple(&mut store, "a").await.unwrap();
        store.remove(Uuid::new_v4()).await;
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_all_leaves_other_users_untouched() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();

        let mut store_a =
            NotificationStore::for_user(kv.clone(), Arc::new(NoopPushChannel), user_a).await;
        let mut store_b =
            NotificationStore::for_user(kv.clone(), Arc::new(NoopPushChannel), user_b).await;
        add_simple(&mut store_a, "for a").await.unwrap();
        add_simple(&mut store_b, "for b").await.unwrap();

        store_a.clear_all().await;
        assert!(store_a.records().is_empty());
        assert!(kv.get(&keys::notifications(user_a)).await.unwrap().is_none());
        assert!(kv.get(&keys::notifications(user_b)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear_all_without_user_is_noop() {
        let mut store = NotificationStore::new(Arc::new(FailingKv), Arc::new(NoopPushChannel));
        store.clear_all().await;
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_user_switch_loads_own_list() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();

        let mut store =
            NotificationStore::for_user(kv.clone(), Arc::new(NoopPushChannel), user_a).await;
        add_simple(&mut store, "a only").await.unwrap();

        store.set_user(Some(user_b)).await;
        assert!(store.records().is_empty());
        assert_eq!(store.unread_count(), 0);

        add_simple(&mut store, "b only").await.unwrap();
        store.set_user(Some(user_a)).await;
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].title, "a only");
    }

    #[tokio::test]
    async fn test_state_survives_reload() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let user = Uuid::new_v4();

        let mut store =
            NotificationStore::for_user(kv.clone(), Arc::new(NoopPushChannel), user).await;
        let rec = add_simple(&mut store, "keep me").await.unwrap();
        store.mark_read(rec.id).await;

        let reloaded = NotificationStore::for_user(kv, Arc::new(NoopPushChannel), user).await;
        assert_eq!(reloaded.records().len(), 1);
        assert!(reloaded.records()[0].read);
        assert_eq!(reloaded.unread_count(), 0);
    }

    #[tokio::test]
    async fn test_corrupted_persisted_data_degrades_to_empty() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let user = Uuid::new_v4();
        kv.set(&keys::notifications(user), "{not json").await.unwrap();

        let store = NotificationStore::for_user(kv, Arc::new(NoopPushChannel), user).await;
        assert!(store.records().is_empty());
        assert_eq!(store.unread_count(), 0);
    }

    #[tokio::test]
    async fn test_storage_failures_never_surface() {
        let mut store =
            NotificationStore::for_user(Arc::new(FailingKv), Arc::new(NoopPushChannel), Uuid::new_v4())
                .await;
        let rec = add_simple(&mut store, "a").await.unwrap();
        assert_eq!(store.records().len(), 1);
        store.mark_read(rec.id).await;
        store.clear_all().await;
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_request_permission_without_capability_is_false() {
        let mut store = store_for(Uuid::new_v4()).await;
        assert!(!store.request_push_permission().await);
        assert_eq!(store.push_permission(), PushPermission::Default);
    }

    #[tokio::test]
    async fn test_request_permission_grant_flow() {
        let push = Arc::new(BroadcastPushChannel::new(8, PushPermission::Granted));
        let mut store = NotificationStore::for_user(
            Arc::new(MemoryKeyValueStore::new()),
            push.clone(),
            Uuid::new_v4(),
        )
        .await;

        assert!(store.request_push_permission().await);
        assert_eq!(store.push_permission(), PushPermission::Granted);
        // Idempotent once granted.
        assert!(store.request_push_permission().await);
    }

    #[tokio::test]
    async fn test_request_permission_denied_is_terminal() {
        let push = Arc::new(BroadcastPushChannel::with_permission(
            8,
            PushPermission::Denied,
            PushPermission::Granted,
        ));
        let mut store = NotificationStore::for_user(
            Arc::new(MemoryKeyValueStore::new()),
            push,
            Uuid::new_v4(),
        )
        .await;

        assert_eq!(store.push_permission(), PushPermission::Denied);
        assert!(!store.request_push_permission().await);
        assert_eq!(store.push_permission(), PushPermission::Denied);
    }

    #[tokio::test]
    async fn test_granted_add_emits_push_with_icon_and_tag() {
        let push = Arc::new(BroadcastPushChannel::with_permission(
            8,
            PushPermission::Granted,
            PushPermission::Granted,
        ));
        let mut rx = push.subscribe();
        let user = Uuid::new_v4();
        let mut store =
            NotificationStore::for_user(Arc::new(MemoryKeyValueStore::new()), push, user).await;

        let rec = store
            .add(
                NotificationCategory::Community,
                NotificationEvent::Liked,
                "Curtida",
                "Alguém curtiu seu post",
                Some("/comunidade".to_string()),
                None,
            )
            .await
            .unwrap();

        let msg = rx.recv().await.unwrap();
        assert_eq!(msg.user_id, user);
        assert_eq!(msg.title, "Curtida");
        assert_eq!(msg.icon.as_deref(), Some(PUSH_ICON));
        assert_eq!(msg.tag, rec.id.to_string());
        assert_eq!(msg.link.as_deref(), Some("/comunidade"));
    }

    #[tokio::test]
    async fn test_denied_add_stores_but_skips_push() {
        let push = Arc::new(BroadcastPushChannel::with_permission(
            8,
            PushPermission::Denied,
            PushPermission::Granted,
        ));
        let mut rx = push.subscribe();
        let mut store = NotificationStore::for_user(
            Arc::new(MemoryKeyValueStore::new()),
            push,
            Uuid::new_v4(),
        )
        .await;

        add_simple(&mut store, "stored anyway").await.unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.unread_count(), 1);
        assert!(matches!(
            rx.try_recv(),
            Err(tokio::sync::broadcast::error::TryRecvError::Empty)
        ));
    }
}
