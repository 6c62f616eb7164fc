//! Registry of per-user notification stores.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use mistica_core::traits::push::PushChannel;
use mistica_core::traits::storage::KeyValueStore;

use crate::store::NotificationStore;

/// Hands out one [`NotificationStore`] per user, shared across requests.
///
/// Stores are created lazily on first access and dropped on `detach`
/// (logout). Each store sits behind an async mutex because its
/// operations mutate list state and await the backend; the map itself
/// is only touched briefly and never across an await point.
#[derive(Debug)]
pub struct NotificationCenter {
    kv: Arc<dyn KeyValueStore>,
    push: Arc<dyn PushChannel>,
    stores: DashMap<Uuid, Arc<Mutex<NotificationStore>>>,
}

impl NotificationCenter {
    pub fn new(kv: Arc<dyn KeyValueStore>, push: Arc<dyn PushChannel>) -> Self {
        Self {
            kv,
            push,
            stores: DashMap::new(),
        }
    }

    /// Get the store for `user_id`, initializing it on first access.
    pub async fn store_for(&self, user_id: Uuid) -> Arc<Mutex<NotificationStore>> {
        if let Some(existing) = self.stores.get(&user_id) {
            return existing.clone();
        }
        // Initialize outside the map so no guard is held across await.
        let store =
            NotificationStore::for_user(self.kv.clone(), self.push.clone(), user_id).await;
        self.stores
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(store)))
            .clone()
    }

    /// Drop the in-memory store for `user_id`. Persisted data stays.
    pub fn detach(&self, user_id: Uuid) {
        self.stores.remove(&user_id);
    }

    /// Number of users with a live store.
    pub fn attached_users(&self) -> usize {
        self.stores.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mistica_entity::notification::{NotificationCategory, NotificationEvent};

    use crate::backend::MemoryKeyValueStore;
    use crate::channel::NoopPushChannel;

    fn center() -> NotificationCenter {
        NotificationCenter::new(Arc::new(MemoryKeyValueStore::new()), Arc::new(NoopPushChannel))
    }

    #[tokio::test]
    async fn test_store_is_shared_per_user() {
        let center = center();
        let user = Uuid::new_v4();

        let first = center.store_for(user).await;
        first
            .lock()
            .await
            .add(
                NotificationCategory::Feed,
                NotificationEvent::Created,
                "t",
                "b",
                None,
                None,
            )
            .await
            .unwrap();

        let second = center.store_for(user).await;
        assert_eq!(second.lock().await.records().len(), 1);
        assert_eq!(center.attached_users(), 1);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let center = center();
        let store_a = center.store_for(Uuid::new_v4()).await;
        let store_b = center.store_for(Uuid::new_v4()).await;

        store_a
            .lock()
            .await
            .add(
                NotificationCategory::Community,
                NotificationEvent::Commented,
                "t",
                "b",
                None,
                None,
            )
            .await
            .unwrap();

        assert!(store_b.lock().await.records().is_empty());
        assert_eq!(center.attached_users(), 2);
    }

    #[tokio::test]
    async fn test_detach_drops_store_but_keeps_persisted_data() {
        let center = center();
        let user = Uuid::new_v4();

        let store = center.store_for(user).await;
        store
            .lock()
            .await
            .add(
                NotificationCategory::Feed,
                NotificationEvent::Created,
                "t",
                "b",
                None,
                None,
            )
            .await
            .unwrap();

        center.detach(user);
        assert_eq!(center.attached_users(), 0);

        let reattached = center.store_for(user).await;
        assert_eq!(reattached.lock().await.records().len(), 1);
    }
}
