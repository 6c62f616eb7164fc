//! # mistica-entity
//!
//! Domain entities for the Biblioteca Mística platform: users, feed posts,
//! community posts with likes and comments, client-cached notification
//! records, and chat messages.

pub mod chat;
pub mod community;
pub mod feed;
pub mod notification;
pub mod user;
