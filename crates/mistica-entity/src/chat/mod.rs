//! Chat domain entities.

pub mod message;

pub use message::{ChatMessage, ChatRole};
