//! Session token issuance, caching, and validation.

pub mod manager;
pub mod store;
pub mod token;

pub use manager::SessionManager;
pub use store::{Session, SessionStore};
