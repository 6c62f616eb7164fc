//! Key-value storage trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for simple string key-value persistence.
///
/// Values are opaque strings (the callers serialize JSON into them). The
/// same store logic works against in-memory, file-backed, or any other
/// backend, which keeps domain code storage-agnostic and testable.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any previous value for the key.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
