//! Profile creation service - core business logic

use std::sync::Arc;

use buidlmatch_domain::{BuidlMatchError, Profile, ProfileDraft, Result};
use chrono::Utc;
use tracing::info;

use crate::discovery::ports::ProfileStore;

/// Validates profile submissions and persists accepted ones.
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    /// Create a new profile service.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Finalize and persist a profile submission.
    ///
    /// The draft must be complete (name, role, bio, at least one skill);
    /// incomplete drafts are rejected at this boundary so downstream code
    /// never sees a partial profile. The identifier derives from the creation
    /// timestamp in milliseconds. The record is persisted to the profile
    /// collection and becomes the current-user marker.
    pub async fn create_profile(&self, draft: ProfileDraft) -> Result<Profile> {
        let id = Utc::now().timestamp_millis();
        let profile = draft.into_profile(id).ok_or_else(|| {
            BuidlMatchError::InvalidInput(
                "profile requires a name, role, bio, and at least one skill".into(),
            )
        })?;

        self.store.save_profile(profile.clone()).await?;
        self.store.set_current_user(profile.clone()).await?;

        info!(profile_id = profile.id, "builder profile created");
        Ok(profile)
    }

    /// Load the accumulated match list for display.
    pub async fn matches(&self) -> Result<Vec<Profile>> {
        self.store.load_matches().await
    }
}
