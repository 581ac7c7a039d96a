//! Port interfaces for profile persistence
//!
//! These traits define the boundary between core business logic and the
//! storage implementation. The persisted collections are advisory, not
//! authoritative: implementations must treat an absent or unparseable value
//! as an empty collection rather than surfacing a parse error.

use async_trait::async_trait;
use buidlmatch_domain::{Profile, Result};

/// Trait bridging the in-memory profile and match collections to a persistent
/// string-keyed store.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the persisted profile collection.
    ///
    /// A missing or malformed value yields an empty collection.
    async fn load_profiles(&self) -> Result<Vec<Profile>>;

    /// Append `profile` to the persisted collection and rewrite it in full.
    ///
    /// No uniqueness check is performed; identifiers derive from wall-clock
    /// millis, so a duplicate requires two creations in the same millisecond.
    async fn save_profile(&self, profile: Profile) -> Result<()>;

    /// Load the persisted match list.
    ///
    /// Same contract as [`ProfileStore::load_profiles`], separate key.
    async fn load_matches(&self) -> Result<Vec<Profile>>;

    /// Rewrite the persisted match list in full.
    async fn save_matches(&self, matches: Vec<Profile>) -> Result<()>;

    /// Persist the most recently created self-profile, overwriting any
    /// previous value.
    async fn set_current_user(&self, profile: Profile) -> Result<()>;
}
