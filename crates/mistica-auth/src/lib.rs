//! # mistica-auth
//!
//! Session lifecycle for the Biblioteca Mística platform: signup, login,
//! logout, and opaque session-token validation.
//!
//! Passwords are stored and compared in plain text. This is a deliberate,
//! documented prototype limitation of the membership platform, not an
//! oversight; swapping in a hasher would touch only
//! [`session::manager::SessionManager`].

pub mod session;
