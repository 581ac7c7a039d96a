//! Discovery engine - filtered candidate sequence and swipe state machine
//!
//! Per filtered sequence the engine is in one of two states: browsing at some
//! cursor position, or exhausted. A decision always advances the cursor by
//! exactly one; re-applying a filter (even an unchanged one) resets the
//! cursor to the head of the recomputed sequence.

use std::sync::Arc;

use buidlmatch_domain::{FilterCriteria, Profile};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::ports::ProfileStore;
use super::seeds::seed_profiles;

/// Swipe decision applied to the current candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwipeDirection {
    Accept,
    Reject,
}

/// Drives candidate presentation and match accumulation for one session.
///
/// The candidate pool is the seed catalog plus every persisted profile that
/// is not the user's own record. The pool is fixed once loaded; `reload`
/// re-reads the store when the surrounding application knows new profiles
/// were created.
pub struct DiscoveryEngine {
    store: Arc<dyn ProfileStore>,
    all_profiles: Vec<Profile>,
    criteria: FilterCriteria,
    filtered: Vec<Profile>,
    cursor: usize,
    matches: Vec<Profile>,
}

impl DiscoveryEngine {
    /// Build an engine from persisted state.
    ///
    /// Load failures degrade to empty collections; the engine then presents
    /// the seed catalog only. Nothing here raises to the caller.
    pub async fn load(store: Arc<dyn ProfileStore>) -> Self {
        let stored = store.load_profiles().await.unwrap_or_else(|err| {
            warn!(error = %err, "failed to load persisted profiles, continuing with seeds only");
            Vec::new()
        });
        let matches = store.load_matches().await.unwrap_or_else(|err| {
            warn!(error = %err, "failed to load persisted matches, starting empty");
            Vec::new()
        });

        let mut engine = Self {
            store,
            all_profiles: Vec::new(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            cursor: 0,
            matches,
        };
        engine.set_pool(stored);
        engine
    }

    /// Re-read the persisted profiles and rebuild the candidate pool.
    ///
    /// Keeps the active criteria; the cursor resets because the pool changed.
    pub async fn reload(&mut self) {
        let stored = self.store.load_profiles().await.unwrap_or_else(|err| {
            warn!(error = %err, "failed to reload persisted profiles, continuing with seeds only");
            Vec::new()
        });
        self.set_pool(stored);
    }

    fn set_pool(&mut self, stored: Vec<Profile>) {
        let mut pool = seed_profiles();
        pool.extend(stored.into_iter().filter(|p| !p.is_current_user));
        self.all_profiles = pool;
        self.refresh_filtered();
    }

    /// Replace the active criteria and recompute the filtered sequence.
    ///
    /// The cursor unconditionally resets to 0, even when the new criteria
    /// produce an identical sequence.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh_filtered();
        info!(
            active_filters = self.criteria.active_count(),
            candidates = self.filtered.len(),
            "filter applied"
        );
    }

    fn refresh_filtered(&mut self) {
        self.filtered =
            self.all_profiles.iter().filter(|p| self.criteria.matches(p)).cloned().collect();
        self.cursor = 0;
    }

    /// The candidate at the cursor, or `None` once the sequence is exhausted.
    pub fn current_candidate(&self) -> Option<&Profile> {
        self.filtered.get(self.cursor)
    }

    /// Apply a swipe decision to the current candidate.
    ///
    /// No-op when the sequence is exhausted. On accept the candidate is
    /// appended to the match list and the list is persisted before the cursor
    /// advance becomes observable; a persistence failure is logged and
    /// swallowed (the in-memory list stays authoritative for the session).
    /// Returns the accepted profile on a right-swipe.
    pub async fn decide(&mut self, direction: SwipeDirection) -> Option<Profile> {
        let candidate = self.filtered.get(self.cursor)?.clone();

        if direction == SwipeDirection::Accept {
            self.matches.push(candidate.clone());
            if let Err(err) = self.store.save_matches(self.matches.clone()).await {
                error!(error = %err, profile_id = candidate.id, "failed to persist match list");
            }
        }

        self.cursor += 1;

        match direction {
            SwipeDirection::Accept => Some(candidate),
            SwipeDirection::Reject => None,
        }
    }

    /// Active filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Accumulated matches, oldest first.
    pub fn matches(&self) -> &[Profile] {
        &self.matches
    }

    /// Index of the next candidate within the filtered sequence.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the filtered sequence.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Whether every candidate in the sequence has been decided.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.filtered.len()
    }
}
