//! Profile discovery and matching
//!
//! Combines the compiled-in seed catalog with persisted profiles, applies the
//! active filter criteria, and drives the swipe state machine.

pub mod engine;
pub mod ports;
pub mod seeds;
