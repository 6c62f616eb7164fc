//! # mistica-notification
//!
//! The per-user notification subsystem: an ordered, newest-first list of
//! notification records cached in a key-value store, an unread counter
//! derived from that list, and a push-permission lifecycle over an
//! optional platform capability.
//!
//! The store is deliberately forgiving: missing users, unknown record
//! ids, unreadable persisted data, and failed push deliveries all
//! degrade to no-ops rather than errors. It is a best-effort cache, not
//! a system of record.

pub mod backend;
pub mod center;
pub mod channel;
pub mod keys;
pub mod store;

pub use backend::{FileKeyValueStore, MemoryKeyValueStore};
pub use center::NotificationCenter;
pub use channel::{BroadcastPushChannel, NoopPushChannel};
pub use store::NotificationStore;
