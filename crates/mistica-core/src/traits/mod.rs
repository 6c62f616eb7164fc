//! Capability traits implemented by pluggable backends.

pub mod push;
pub mod storage;

pub use push::{PushChannel, PushMessage, PushPermission};
pub use storage::KeyValueStore;
