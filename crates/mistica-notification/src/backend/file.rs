//! File-backed key-value store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use mistica_core::error::AppError;
use mistica_core::result::AppResult;
use mistica_core::traits::storage::KeyValueStore;

/// Key-value store persisting each key as one JSON file under a data
/// directory. Survives server restarts, which the in-memory backend
/// does not.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `dir`. The directory is created lazily
    /// on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Translate a key into a file path, replacing separators that are
    /// not filesystem-safe.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c == ':' || c == '/' { '_' } else { c })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read '{key}': {e}"))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if !Path::exists(&self.dir) {
            tokio::fs::create_dir_all(&self.dir)
                .await
                .map_err(|e| AppError::storage(format!("Failed to create data dir: {e}")))?;
        }
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| AppError::storage(format!("Failed to write '{key}': {e}")))
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Failed to remove '{key}': {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> FileKeyValueStore {
        FileKeyValueStore::new(std::env::temp_dir().join(format!("mistica-kv-{}", Uuid::new_v4())))
    }

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let store = temp_store();
        store.set("mistica:notifications:abc", "[]").await.unwrap();
        assert_eq!(
            store.get("mistica:notifications:abc").await.unwrap(),
            Some("[]".to_string())
        );
    }

    #[tokio::test]
    async fn test_absent_key_is_none() {
        let store = temp_store();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = temp_store();
        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }
}
