//! Notification record entities.
//!
//! Unlike the other entities, notification records are not database rows:
//! they are cached per user as a single JSON document in a key-value
//! store (see `mistica-notification`).

pub mod category;
pub mod event;
pub mod record;

pub use category::NotificationCategory;
pub use event::NotificationEvent;
pub use record::{NotificationContext, NotificationRecord};
