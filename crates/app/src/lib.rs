//! # BuidlMatch App
//!
//! Application layer - commands and dependency wiring.
//!
//! This crate contains:
//! - Command functions (UI to engine bridge)
//! - Application context (dependency injection)
//! - Health check and command logging utilities
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides the command surface for a frontend

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
