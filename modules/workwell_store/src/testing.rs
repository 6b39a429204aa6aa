//! In-memory test harness
//!
//! Swaps the configured database for a private in-memory SQLite instance,
//! creates the schema from the entity definitions and seeds a single
//! placeholder company. Seeding failures are logged so the harness is still
//! handed out.

use crate::config::{Config, DatabaseConfig, SchemaMode, SeedConfig};
use crate::domain::{SeedOutcome, SeedProfile};
use crate::module::{connect, WorkWellStore};
use std::ops::Deref;

pub struct TestDatabase {
    store: WorkWellStore,
    seed: Option<SeedOutcome>,
}

impl TestDatabase {
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                schema_mode: SchemaMode::CreateOnly,
                ..DatabaseConfig::default()
            },
            seed: SeedConfig {
                enabled: true,
                profile: SeedProfile::Minimal,
            },
        };

        let db = connect(&config.database).await?;
        let capability = config.database.schema_capability();
        let store = WorkWellStore::from_connection(config, db, capability);
        let seed = store.prepare_test_backend().await;

        Ok(Self { store, seed })
    }

    /// Outcome of the harness seeding, `None` when it failed
    pub fn seed_outcome(&self) -> Option<SeedOutcome> {
        self.seed
    }

    pub fn store(&self) -> &WorkWellStore {
        &self.store
    }
}

impl Deref for TestDatabase {
    type Target = WorkWellStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
