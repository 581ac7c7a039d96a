//! Profile creation flow

pub mod service;

pub use service::ProfileService;
