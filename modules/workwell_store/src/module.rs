//! Store wiring - connection, repositories and bootstrap entry point

use crate::config::{Config, DatabaseConfig};
use crate::contract::BootstrapError;
use crate::domain::{
    BootstrapReport, Bootstrapper, ChatRepository, CompanyRepository, DepartmentRepository,
    MeditationRepository, SchemaBackend, SchemaCapability, SeedOutcome, UserRepository,
};
use crate::infra::storage::{
    SeaOrmChatRepository, SeaOrmCompanyRepository, SeaOrmDepartmentRepository,
    SeaOrmMeditationRepository, SeaOrmSchemaBackend, SeaOrmUserRepository,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;

/// Open a pooled connection for the configured backend
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, BootstrapError> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.pool_size())
        .connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        // Every pooled connection would otherwise open its own empty database
        opt.min_connections(1);
    }
    if let Some(lifetime) = cfg.connection_lifetime() {
        opt.idle_timeout(lifetime).max_lifetime(lifetime);
    }

    let db = Database::connect(opt)
        .await
        .map_err(|e| BootstrapError::BackendUnavailable(e.into()))?;
    tracing::info!(backend = ?db.get_database_backend(), "Database connection established");
    Ok(db)
}

/// Repositories and schema backend sharing one connection
pub struct WorkWellStore {
    config: Config,
    db: Arc<DatabaseConnection>,
    schema: Arc<dyn SchemaBackend>,
    companies: Arc<dyn CompanyRepository>,
    departments: Arc<dyn DepartmentRepository>,
    users: Arc<dyn UserRepository>,
    chats: Arc<dyn ChatRepository>,
    meditations: Arc<dyn MeditationRepository>,
}

impl WorkWellStore {
    /// Connect and build the store from configuration
    pub async fn init(config: Config) -> Result<Self, BootstrapError> {
        let db = connect(&config.database).await?;
        let capability = config.database.schema_capability();
        Ok(Self::from_connection(config, db, capability))
    }

    /// Build the store on an existing connection
    pub fn from_connection(
        config: Config,
        db: DatabaseConnection,
        capability: SchemaCapability,
    ) -> Self {
        let db = Arc::new(db);

        Self {
            config,
            schema: Arc::new(SeaOrmSchemaBackend::new(db.clone(), capability)),
            companies: Arc::new(SeaOrmCompanyRepository::new(db.clone())),
            departments: Arc::new(SeaOrmDepartmentRepository::new(db.clone())),
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            chats: Arc::new(SeaOrmChatRepository::new(db.clone())),
            meditations: Arc::new(SeaOrmMeditationRepository::new(db.clone())),
            db,
        }
    }

    pub fn bootstrapper(&self) -> Bootstrapper {
        Bootstrapper::new(
            self.schema.clone(),
            self.companies.clone(),
            self.departments.clone(),
        )
    }

    /// Run the startup bootstrap as configured
    pub async fn ensure_ready(&self) -> Result<BootstrapReport, BootstrapError> {
        let bootstrapper = self.bootstrapper();
        let report = if self.config.seed.enabled {
            bootstrapper.ensure_ready(self.config.seed.profile).await?
        } else {
            bootstrapper.ensure_schema_only().await?
        };

        tracing::info!(
            capability = ?self.schema.capability(),
            schema = ?report.schema,
            seed = ?report.seed,
            "Store bootstrap completed"
        );
        Ok(report)
    }

    /// Test-harness bootstrap; failures are logged, never returned
    pub async fn prepare_test_backend(&self) -> Option<SeedOutcome> {
        self.bootstrapper().prepare_test_backend().await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn capability(&self) -> SchemaCapability {
        self.schema.capability()
    }

    pub fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.companies.clone()
    }

    pub fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.departments.clone()
    }

    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    pub fn chats(&self) -> Arc<dyn ChatRepository> {
        self.chats.clone()
    }

    pub fn meditations(&self) -> Arc<dyn MeditationRepository> {
        self.meditations.clone()
    }
}
