//! End-to-end exercise of the notification subsystem: center, store,
//! file persistence, and the broadcast push channel together.

use std::sync::Arc;

use uuid::Uuid;

use mistica_core::traits::push::{PushChannel, PushPermission};
use mistica_entity::notification::{NotificationCategory, NotificationEvent};
use mistica_notification::{BroadcastPushChannel, FileKeyValueStore, NotificationCenter};

fn temp_backend() -> Arc<FileKeyValueStore> {
    let dir = std::env::temp_dir().join(format!("mistica-test-{}", Uuid::new_v4()));
    Arc::new(FileKeyValueStore::new(dir))
}

#[tokio::test]
async fn test_notification_round_trip_through_file_backend() {
    let kv = temp_backend();
    let push = Arc::new(BroadcastPushChannel::new(16, PushPermission::Granted));
    let center = NotificationCenter::new(kv.clone(), push.clone());

    let reader = Uuid::new_v4();
    let store = center.store_for(reader).await;

    {
        let mut store = store.lock().await;
        assert!(store.request_push_permission().await);
        store
            .add(
                NotificationCategory::Feed,
                NotificationEvent::Created,
                "Novo post no feed",
                "A Jornada do Herói",
                Some("/feed".to_string()),
                None,
            )
            .await
            .unwrap();
        assert_eq!(store.unread_count(), 1);
    }

    // A fresh center over the same backend sees the persisted list.
    let rebooted = NotificationCenter::new(kv, push);
    let reloaded = rebooted.store_for(reader).await;
    let reloaded = reloaded.lock().await;
    assert_eq!(reloaded.records().len(), 1);
    assert_eq!(reloaded.records()[0].title, "Novo post no feed");
    assert_eq!(reloaded.unread_count(), 1);
}

#[tokio::test]
async fn test_granted_permission_pushes_reach_subscribers() {
    let kv = temp_backend();
    let push = Arc::new(BroadcastPushChannel::with_permission(
        16,
        PushPermission::Granted,
        PushPermission::Granted,
    ));
    let center = NotificationCenter::new(kv, push.clone());

    let mut rx = push.subscribe();
    let user = Uuid::new_v4();
    let store = center.store_for(user).await;
    store
        .lock()
        .await
        .add(
            NotificationCategory::Community,
            NotificationEvent::Commented,
            "Novo comentário",
            "Luna comentou no seu post",
            Some("/comunidade".to_string()),
            None,
        )
        .await
        .unwrap();

    let message = rx.recv().await.unwrap();
    assert_eq!(message.user_id, user);
    assert_eq!(message.title, "Novo comentário");
    assert_eq!(push.permission(), PushPermission::Granted);
}

#[tokio::test]
async fn test_clear_all_removes_persisted_file() {
    let kv = temp_backend();
    let push = Arc::new(BroadcastPushChannel::new(16, PushPermission::Default));
    let center = NotificationCenter::new(kv.clone(), push.clone());

    let user = Uuid::new_v4();
    let store = center.store_for(user).await;
    {
        let mut store = store.lock().await;
        store
            .add(
                NotificationCategory::Feed,
                NotificationEvent::Updated,
                "Atualização publicada",
                "Módulo 3 revisado",
                None,
                None,
            )
            .await
            .unwrap();
        store.clear_all().await;
        assert!(store.records().is_empty());
    }

    let rebooted = NotificationCenter::new(kv, push);
    let reloaded = rebooted.store_for(user).await;
    assert!(reloaded.lock().await.records().is_empty());
}
