//! In-memory key-value store.

use async_trait::async_trait;
use dashmap::DashMap;

use mistica_core::result::AppResult;
use mistica_core::traits::storage::KeyValueStore;

/// Process-local key-value store backed by a concurrent map.
///
/// The default backend; also what the test suites run against.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: DashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get() {
        let store = MemoryKeyValueStore::new();
        store.set("key1", "value1").await.unwrap();
        assert_eq!(store.get("key1").await.unwrap(), Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_set_replaces() {
        let store = MemoryKeyValueStore::new();
        store.set("key1", "old").await.unwrap();
        store.set("key1", "new").await.unwrap();
        assert_eq!(store.get("key1").await.unwrap(), Some("new".to_string()));
    }

    #[tokio::test]
    async fn test_remove_absent_is_ok() {
        let store = MemoryKeyValueStore::new();
        store.remove("nothing").await.unwrap();
        assert_eq!(store.get("nothing").await.unwrap(), None);
    }
}
