//! SQLite-backed implementation of the `ProfileStore` port
//!
//! Each collection lives under a fixed key in the `kv_store` table as a JSON
//! document, and every mutation rewrites the owning document in full. There
//! is no transaction spanning the profile and match keys; the store is
//! advisory, not authoritative, so a crash between writes is accepted.

use std::sync::Arc;

use async_trait::async_trait;
use buidlmatch_core::ProfileStore;
use buidlmatch_domain::constants::{CURRENT_USER_KEY, MATCHES_KEY, PROFILES_KEY};
use buidlmatch_domain::{BuidlMatchError, Profile, Result as DomainResult};
use rusqlite::{params, OptionalExtension};
use tokio::task;
use tracing::warn;

use super::manager::{DbConnection, DbManager};
use crate::errors::InfraError;

/// SQLite-backed implementation of `ProfileStore`.
pub struct SqliteProfileStore {
    db: Arc<DbManager>,
}

impl SqliteProfileStore {
    /// Create a new store instance.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn load_profiles(&self) -> DomainResult<Vec<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Profile>> {
            let conn = db.get_connection()?;
            let raw = read_value(&conn, PROFILES_KEY)?;
            Ok(decode_collection(PROFILES_KEY, raw))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save_profile(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            // Full-rewrite semantics: append to whatever decodes, replacing a
            // corrupt document rather than failing on it.
            let mut profiles = decode_collection(PROFILES_KEY, read_value(&conn, PROFILES_KEY)?);
            profiles.push(profile);
            let encoded = serde_json::to_string(&profiles).map_err(map_infra_error)?;
            write_value(&conn, PROFILES_KEY, &encoded)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn load_matches(&self) -> DomainResult<Vec<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Profile>> {
            let conn = db.get_connection()?;
            let raw = read_value(&conn, MATCHES_KEY)?;
            Ok(decode_collection(MATCHES_KEY, raw))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save_matches(&self, matches: Vec<Profile>) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let encoded = serde_json::to_string(&matches).map_err(map_infra_error)?;
            write_value(&conn, MATCHES_KEY, &encoded)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set_current_user(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let encoded = serde_json::to_string(&profile).map_err(map_infra_error)?;
            write_value(&conn, CURRENT_USER_KEY, &encoded)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read the raw value stored under `key`, if any.
fn read_value(conn: &DbConnection, key: &str) -> DomainResult<Option<String>> {
    conn.query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| row.get(0))
        .optional()
        .map_err(|e| map_infra_error(InfraError::from(e)))
}

/// Upsert `value` under `key`.
fn write_value(conn: &DbConnection, key: &str, value: &str) -> DomainResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, CAST(strftime('%s','now') AS INTEGER))
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![key, value],
    )
    .map_err(|e| map_infra_error(InfraError::from(e)))?;
    Ok(())
}

/// Decode a persisted collection, treating absent or malformed values as
/// empty. A parse failure is logged but never surfaced to the caller.
fn decode_collection(key: &str, raw: Option<String>) -> Vec<Profile> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(profiles) => profiles,
        Err(err) => {
            warn!(key, error = %err, "persisted collection is malformed, treating as empty");
            Vec::new()
        }
    }
}

fn map_infra_error(err: impl Into<InfraError>) -> BuidlMatchError {
    BuidlMatchError::from(err.into())
}

fn map_join_error(err: task::JoinError) -> BuidlMatchError {
    BuidlMatchError::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use buidlmatch_domain::{ProfileDraft, Role};
    use tempfile::TempDir;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let manager = DbManager::new(db_path, 5).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        (Arc::new(manager), temp_dir)
    }

    fn test_profile(id: i64, name: &str) -> Profile {
        ProfileDraft {
            name: name.into(),
            role: Some(Role::Developer),
            bio: "Test bio".into(),
            skills: vec!["Rust".into()],
            location: Some("San Francisco, CA".into()),
            ..ProfileDraft::default()
        }
        .into_profile(id)
        .expect("complete draft")
    }

    fn write_raw(db: &DbManager, key: &str, value: &str) {
        let conn = db.get_connection().expect("connection");
        write_value(&conn, key, value).expect("write raw value");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_collections_load_as_empty() {
        let (db, _temp_dir) = setup_test_db();
        let store = SqliteProfileStore::new(db);

        assert!(store.load_profiles().await.expect("load profiles").is_empty());
        assert!(store.load_matches().await.expect("load matches").is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn saved_profiles_round_trip() {
        let (db, _temp_dir) = setup_test_db();
        let store = SqliteProfileStore::new(db);

        let first = test_profile(1_700_000_000_000, "First");
        let second = test_profile(1_700_000_000_001, "Second");
        store.save_profile(first.clone()).await.expect("save first");
        store.save_profile(second.clone()).await.expect("save second");

        let loaded = store.load_profiles().await.expect("load profiles");
        assert_eq!(loaded, vec![first, second]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn corrupt_profiles_value_loads_as_empty() {
        let (db, _temp_dir) = setup_test_db();
        write_raw(&db, PROFILES_KEY, "not valid json {{{");
        let store = SqliteProfileStore::new(db);

        let loaded = store.load_profiles().await.expect("load profiles");
        assert!(loaded.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn saving_over_a_corrupt_collection_replaces_it() {
        let (db, _temp_dir) = setup_test_db();
        write_raw(&db, PROFILES_KEY, "[1, 2, \"garbage\"]");
        let store = SqliteProfileStore::new(db);

        let profile = test_profile(1_700_000_000_002, "Fresh");
        store.save_profile(profile.clone()).await.expect("save profile");

        assert_eq!(store.load_profiles().await.expect("load profiles"), vec![profile]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn match_list_is_rewritten_in_full() {
        let (db, _temp_dir) = setup_test_db();
        let store = SqliteProfileStore::new(db);

        let a = test_profile(10, "A");
        let b = test_profile(11, "B");
        store.save_matches(vec![a.clone()]).await.expect("save one");
        store.save_matches(vec![a.clone(), b.clone()]).await.expect("save two");

        assert_eq!(store.load_matches().await.expect("load matches"), vec![a, b]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn current_user_marker_is_overwritten() {
        let (db, _temp_dir) = setup_test_db();
        let store = SqliteProfileStore::new(Arc::clone(&db));

        let first = test_profile(20, "First Self");
        let second = test_profile(21, "Second Self");
        store.set_current_user(first).await.expect("set first");
        store.set_current_user(second.clone()).await.expect("set second");

        let conn = db.get_connection().expect("connection");
        let raw = read_value(&conn, CURRENT_USER_KEY).expect("read").expect("value present");
        let stored: Profile = serde_json::from_str(&raw).expect("parse current user");
        assert_eq!(stored, second);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn profiles_and_matches_use_separate_keys() {
        let (db, _temp_dir) = setup_test_db();
        let store = SqliteProfileStore::new(db);

        let profile = test_profile(30, "Pool Member");
        let matched = test_profile(31, "Matched");
        store.save_profile(profile.clone()).await.expect("save profile");
        store.save_matches(vec![matched.clone()]).await.expect("save matches");

        assert_eq!(store.load_profiles().await.expect("profiles"), vec![profile]);
        assert_eq!(store.load_matches().await.expect("matches"), vec![matched]);
    }
}
