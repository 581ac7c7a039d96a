//! Profile commands
//!
//! Profile submission from the create-profile form. Validation happens here
//! at the boundary; browsing never re-checks completeness.

use std::sync::Arc;
use std::time::Instant;

use buidlmatch_domain::{Profile, ProfileDraft, Result as DomainResult};
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Create a builder profile from a submitted draft.
///
/// Rejects incomplete drafts with `InvalidInput`. On success the profile is
/// persisted, marked as the current user, and the discovery pool is reloaded
/// so the new record is excluded from the candidate sequence.
pub async fn create_profile(
    ctx: &Arc<AppContext>,
    draft: ProfileDraft,
) -> DomainResult<Profile> {
    let command_name = "profile::create_profile";
    let start = Instant::now();

    let result = ctx.profiles.create_profile(draft).await;

    if result.is_ok() {
        ctx.discovery.lock().await.reload().await;
    }

    if let Err(err) = &result {
        info!(command = command_name, error = error_label(err), "profile rejected");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result
}
