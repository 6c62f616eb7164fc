//! # mistica-service
//!
//! Business logic service layer for Biblioteca Mística. Each service
//! orchestrates repositories and the notification center to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod chat;
pub mod community;
pub mod context;
pub mod feed;
pub mod notification;
pub mod user;

pub use chat::ChatService;
pub use community::CommunityService;
pub use context::RequestContext;
pub use feed::FeedService;
pub use notification::{Notifier, broadcast_audience, interaction_target};
pub use user::UserService;
