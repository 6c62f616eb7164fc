//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod chat;
pub mod community;
pub mod feed;
pub mod health;
pub mod notification;
pub mod user;
