//! Application commands - UI to engine bridge

mod discovery;
mod health;
mod matches;
mod profile;

pub use discovery::*;
pub use health::*;
pub use matches::*;
pub use profile::*;
