//! Application context - dependency injection container

use std::sync::Arc;

use buidlmatch_core::{DiscoveryEngine, ProfileService, ProfileStore};
use buidlmatch_domain::{Config, Result};
use buidlmatch_infra::{config as config_loader, DbManager, SqliteProfileStore};
use tokio::sync::Mutex;
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
///
/// The discovery engine sits behind an async mutex: there is a single logical
/// UI caller, and every engine operation needs `&mut self`.
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub profile_store: Arc<dyn ProfileStore>,
    pub profiles: Arc<ProfileService>,
    pub discovery: Mutex<DiscoveryEngine>,
}

impl AppContext {
    /// Create a context from the ambient configuration.
    ///
    /// Reads `.env` if present, then environment variables, then config
    /// files, then built-in defaults.
    ///
    /// # Errors
    /// Returns an error when a configuration source exists but is invalid,
    /// or when the database cannot be opened or migrated.
    pub async fn new() -> Result<Arc<Self>> {
        dotenvy::dotenv().ok();
        let config = config_loader::load_or_default()?;
        Self::with_config(config).await
    }

    /// Create a context from an explicit configuration.
    ///
    /// # Errors
    /// Returns an error when the database cannot be opened or migrated.
    pub async fn with_config(config: Config) -> Result<Arc<Self>> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let profile_store: Arc<dyn ProfileStore> =
            Arc::new(SqliteProfileStore::new(Arc::clone(&db)));
        let profiles = Arc::new(ProfileService::new(Arc::clone(&profile_store)));
        let discovery = Mutex::new(DiscoveryEngine::load(Arc::clone(&profile_store)).await);

        info!(db_path = %config.database.path, "application context initialised");

        Ok(Arc::new(Self { config, db, profile_store, profiles, discovery }))
    }

    /// Check the health of all wired components.
    ///
    /// Never fails; unhealthy components are reported in the returned status.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new();

        status = status.add_component(match self.db.health_check() {
            Ok(()) => ComponentHealth::healthy("database"),
            Err(e) => ComponentHealth::unhealthy("database", e.to_string()),
        });

        status = status.add_component(match self.profile_store.load_profiles().await {
            Ok(_) => ComponentHealth::healthy("profile_store"),
            Err(e) => ComponentHealth::unhealthy("profile_store", e.to_string()),
        });

        status.calculate_score();
        status
    }
}
