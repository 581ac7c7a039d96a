//! Match list commands
//!
//! The matches page reads the persisted list fresh rather than the session
//! state, so matches made in earlier sessions appear too.

use std::sync::Arc;
use std::time::Instant;

use buidlmatch_domain::{Profile, Result as DomainResult};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Outbound links rendered for one matched profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLinks {
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub twitter_intent: String,
    pub telegram_share: String,
}

/// Load the accumulated match list, oldest first.
pub async fn get_matches(ctx: &Arc<AppContext>) -> DomainResult<Vec<Profile>> {
    let start = Instant::now();
    let result = ctx.profiles.matches().await;
    log_command_execution("matches::get_matches", start.elapsed(), result.is_ok());
    result
}

/// Build the contact links for a matched profile.
///
/// Plain profile links where a handle exists, plus share intents carrying a
/// prefilled introduction message.
pub fn contact_links(profile: &Profile) -> ContactLinks {
    ContactLinks {
        github: profile.github_url(),
        twitter: profile.twitter_url(),
        telegram: profile.telegram_url(),
        twitter_intent: profile.twitter_intent_url(),
        telegram_share: profile.telegram_share_url(),
    }
}
