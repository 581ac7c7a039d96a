//! # BuidlMatch Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The discovery engine (filtered sequential presentation + swipe state
//!   machine)
//! - Port/adapter interfaces (traits)
//! - The profile creation service and the compiled-in seed catalog
//!
//! ## Architecture Principles
//! - Only depends on `buidlmatch-domain`
//! - No database or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod discovery;
pub mod profile;

// Re-export specific items to avoid ambiguity
pub use discovery::engine::{DiscoveryEngine, SwipeDirection};
pub use discovery::ports::ProfileStore;
pub use discovery::seeds::seed_profiles;
pub use profile::ProfileService;
