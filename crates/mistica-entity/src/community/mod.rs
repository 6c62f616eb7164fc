//! Community wall domain entities.

pub mod comment;
pub mod like;
pub mod post;

pub use comment::{CommentWithAuthor, PostComment};
pub use like::PostLike;
pub use post::{CommunityPost, CommunityPostView, NewCommunityPost};
