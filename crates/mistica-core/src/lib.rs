//! # mistica-core
//!
//! Core crate for the Biblioteca Mística platform. Contains capability
//! traits, configuration schemas, shared types, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Mística crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
