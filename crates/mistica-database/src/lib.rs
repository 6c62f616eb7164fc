//! # mistica-database
//!
//! PostgreSQL access layer: connection pool, embedded migrations, and one
//! repository per entity.

pub mod connection;
pub mod migration;
pub mod repositories;
