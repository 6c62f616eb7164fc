//! Feed domain entities.

pub mod kind;
pub mod model;

pub use kind::FeedPostKind;
pub use model::{FeedPost, FeedPostWithAuthor, NewFeedPost};
