//! Repository implementations, one per entity.

pub mod comment;
pub mod community;
pub mod feed;
pub mod like;
pub mod user;

pub use comment::CommentRepository;
pub use community::CommunityRepository;
pub use feed::FeedRepository;
pub use like::LikeRepository;
pub use user::UserRepository;
