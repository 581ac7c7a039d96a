//! Application constants
//!
//! Centralized location for the persistent storage keys. The key names match
//! the collection names earlier releases shipped with, so existing exported
//! data round-trips without a migration.

/// Key under which the full profile collection is persisted.
pub const PROFILES_KEY: &str = "buidlmatch-profiles";

/// Key under which the accumulated match list is persisted.
pub const MATCHES_KEY: &str = "buidlmatch-matches";

/// Key under which the most recently created self-profile is persisted.
pub const CURRENT_USER_KEY: &str = "buidlmatch-current-user";
