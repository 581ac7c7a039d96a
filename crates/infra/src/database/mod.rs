//! SQLite persistence layer
//!
//! The persistent state is a single string-keyed key/value table holding
//! serialized JSON collections. Repositories run blocking rusqlite work on
//! the tokio blocking pool.

pub mod manager;
pub mod profile_store;

pub use manager::DbManager;
pub use profile_store::SqliteProfileStore;
