//! # BuidlMatch Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite-backed profile store (key/value persistence)
//! - Database connection pool management
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `buidlmatch-core`
//! - Depends on `buidlmatch-domain` and `buidlmatch-core`
//! - Contains all "impure" code (I/O)

pub mod config;
pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::{DbManager, SqliteProfileStore};
pub use errors::InfraError;
