//! Mock store implementation for testing
//!
//! Provides an in-memory mock of the `ProfileStore` port, enabling
//! deterministic engine and service tests without database dependencies.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use buidlmatch_core::ProfileStore;
use buidlmatch_domain::{BuidlMatchError, Profile, Result as DomainResult};

/// In-memory mock for `ProfileStore`.
///
/// Collections live behind mutexes; `fail_loads` simulates a store whose
/// persisted values are unreadable, which callers must treat as empty.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<Vec<Profile>>,
    matches: Mutex<Vec<Profile>>,
    current_user: Mutex<Option<Profile>>,
    fail_loads: AtomicBool,
    save_matches_calls: AtomicUsize,
}

impl InMemoryProfileStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the persisted profile collection.
    pub fn with_profiles(self, profiles: Vec<Profile>) -> Self {
        *self.profiles.lock().unwrap() = profiles;
        self
    }

    /// Seed the persisted match list.
    pub fn with_matches(self, matches: Vec<Profile>) -> Self {
        *self.matches.lock().unwrap() = matches;
        self
    }

    /// Make every load operation fail.
    pub fn with_failing_loads(self) -> Self {
        self.fail_loads.store(true, Ordering::SeqCst);
        self
    }

    /// Snapshot of the persisted profile collection.
    pub fn persisted_profiles(&self) -> Vec<Profile> {
        self.profiles.lock().unwrap().clone()
    }

    /// Snapshot of the persisted match list.
    pub fn persisted_matches(&self) -> Vec<Profile> {
        self.matches.lock().unwrap().clone()
    }

    /// The persisted current-user marker, if any.
    pub fn current_user(&self) -> Option<Profile> {
        self.current_user.lock().unwrap().clone()
    }

    /// How many times `save_matches` was invoked.
    pub fn save_matches_calls(&self) -> usize {
        self.save_matches_calls.load(Ordering::SeqCst)
    }

    fn check_loads(&self) -> DomainResult<()> {
        if self.fail_loads.load(Ordering::SeqCst) {
            Err(BuidlMatchError::Database("simulated load failure".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_profiles(&self) -> DomainResult<Vec<Profile>> {
        self.check_loads()?;
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn save_profile(&self, profile: Profile) -> DomainResult<()> {
        self.profiles.lock().unwrap().push(profile);
        Ok(())
    }

    async fn load_matches(&self) -> DomainResult<Vec<Profile>> {
        self.check_loads()?;
        Ok(self.matches.lock().unwrap().clone())
    }

    async fn save_matches(&self, matches: Vec<Profile>) -> DomainResult<()> {
        self.save_matches_calls.fetch_add(1, Ordering::SeqCst);
        *self.matches.lock().unwrap() = matches;
        Ok(())
    }

    async fn set_current_user(&self, profile: Profile) -> DomainResult<()> {
        *self.current_user.lock().unwrap() = Some(profile);
        Ok(())
    }
}
