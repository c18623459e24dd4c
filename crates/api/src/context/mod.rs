//! Application context - dependency injection container

use std::sync::Arc;

use sharehub_core::{Authenticator, ProfileRepository, ProfileService, ResourceCatalog};
use sharehub_domain::{Config, Result, ShareHubError};
use sharehub_infra::{DbManager, MockResourceCatalog, SqliteProfileRepository, TokenAuthenticator};

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Type alias for authenticator port trait object
type DynAuthenticator = dyn Authenticator + Send + Sync + 'static;

/// Type alias for resource catalog port trait object
type DynResourceCatalog = dyn ResourceCatalog + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    /// Loaded configuration
    pub config: Config,
    /// Shared connection pool
    pub db: Arc<DbManager>,
    /// Profile use cases
    pub profiles: Arc<ProfileService>,
    /// Token verification port
    pub authenticator: Arc<DynAuthenticator>,
    /// Read-only resource catalog
    pub resources: Arc<DynResourceCatalog>,
}

impl AppContext {
    /// Create a new application context with custom configuration
    ///
    /// Tests use this to point at a temporary database.
    pub async fn new_with_config(config: Config) -> Result<Self> {
        if config.auth.token_secret.trim().is_empty() {
            return Err(ShareHubError::Config("auth.token_secret must not be empty".into()));
        }

        let db = Arc::new(DbManager::from_config(&config.database)?);
        db.run_migrations()?;

        let repository: Arc<dyn ProfileRepository> =
            Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));
        let profiles = Arc::new(ProfileService::new(repository));

        let authenticator: Arc<DynAuthenticator> =
            Arc::new(TokenAuthenticator::new(&config.auth.token_secret));

        let resources: Arc<DynResourceCatalog> = Arc::new(MockResourceCatalog::embedded()?);

        tracing::info!(db_path = %db.path().display(), "application context initialised");

        Ok(Self { config, db, profiles, authenticator, resources })
    }

    /// Check the health of the context's dependencies
    pub async fn health_check(&self) -> HealthStatus {
        let catalog = if self.resources.list().is_empty() {
            ComponentHealth::unhealthy("resource_catalog", "no resources loaded")
        } else {
            ComponentHealth::healthy("resource_catalog")
        };

        HealthStatus::new().add_component(self.check_database_health().await).add_component(catalog)
    }

    /// Run a trivial query off the async runtime
    async fn check_database_health(&self) -> ComponentHealth {
        let db = Arc::clone(&self.db);
        match tokio::task::spawn_blocking(move || db.health_check()).await {
            Ok(Ok(())) => ComponentHealth::healthy("database"),
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "database health check failed");
                ComponentHealth::unhealthy("database", err.to_string())
            }
            Err(join_err) => {
                tracing::error!(error = %join_err, "database health check task panicked");
                ComponentHealth::unhealthy("database", "health check task failed")
            }
        }
    }
}
