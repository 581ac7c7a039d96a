//! # BuidlMatch Domain
//!
//! Business domain types and models for BuidlMatch.
//!
//! This crate contains:
//! - Domain data types (Profile, FilterCriteria, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (persistent storage keys)
//!
//! ## Architecture
//! - No dependencies on other BuidlMatch crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
