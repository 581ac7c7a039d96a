//! Discovery commands
//!
//! Drive the swipe session: filtering, the current candidate, and decisions.

use std::sync::Arc;
use std::time::Instant;

use buidlmatch_core::SwipeDirection;
use buidlmatch_domain::{FilterCriteria, Profile};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Presentation snapshot of the discovery session.
///
/// `position` is 1-based for the "N of M" progress header; it equals
/// `total + 1` once the sequence is exhausted and `candidate` is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryView {
    pub candidate: Option<Profile>,
    pub position: usize,
    pub total: usize,
    pub match_count: usize,
    pub active_filters: usize,
}

/// Replace the active filter criteria.
///
/// The candidate sequence is recomputed and the cursor returns to the head,
/// even when the criteria are unchanged.
pub async fn apply_filters(ctx: &Arc<AppContext>, criteria: FilterCriteria) {
    let start = Instant::now();
    ctx.discovery.lock().await.apply_filter(criteria);
    log_command_execution("discovery::apply_filters", start.elapsed(), true);
}

/// The candidate currently presented, or `None` once exhausted.
pub async fn current_candidate(ctx: &Arc<AppContext>) -> Option<Profile> {
    ctx.discovery.lock().await.current_candidate().cloned()
}

/// Apply a swipe decision to the current candidate.
///
/// Returns the accepted profile on a right-swipe so the caller can show the
/// match overlay. No-op when the sequence is exhausted.
pub async fn swipe(ctx: &Arc<AppContext>, direction: SwipeDirection) -> Option<Profile> {
    let start = Instant::now();
    let accepted = ctx.discovery.lock().await.decide(direction).await;
    log_command_execution("discovery::swipe", start.elapsed(), true);
    accepted
}

/// Snapshot the session for rendering.
pub async fn discovery_view(ctx: &Arc<AppContext>) -> DiscoveryView {
    let engine = ctx.discovery.lock().await;
    DiscoveryView {
        candidate: engine.current_candidate().cloned(),
        position: engine.cursor() + 1,
        total: engine.filtered_len(),
        match_count: engine.matches().len(),
        active_filters: engine.criteria().active_count(),
    }
}
