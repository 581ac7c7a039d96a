//! Shared helpers for application-layer integration tests

use std::sync::Arc;

use buidlmatch_app::AppContext;
use buidlmatch_domain::{Config, DatabaseConfig, ProfileDraft, Role};
use tempfile::TempDir;

/// A fully wired context backed by a temporary database.
pub struct TestContext {
    pub ctx: Arc<AppContext>,
    _temp_dir: TempDir,
}

pub async fn test_context() -> TestContext {
    init_tracing();

    let temp_dir = TempDir::new().expect("create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let config = Config {
        database: DatabaseConfig {
            path: db_path.to_string_lossy().into_owned(),
            pool_size: 4,
        },
    };
    let ctx = AppContext::with_config(config).await.expect("create app context");
    TestContext { ctx, _temp_dir: temp_dir }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn complete_draft(name: &str) -> ProfileDraft {
    ProfileDraft {
        name: name.into(),
        role: Some(Role::Developer),
        bio: "Building local-first tools".into(),
        skills: vec!["Rust".into()],
        location: Some("Lisbon, Portugal".into()),
        ..ProfileDraft::default()
    }
}
