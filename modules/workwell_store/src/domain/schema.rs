//! Schema capability of a persistence backend

use anyhow::Result;
use async_trait::async_trait;

/// How a backend brings its schema up to date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCapability {
    /// Relational backend that tracks and applies ordered migrations
    IncrementalMigration,
    /// Ephemeral backend that can only create the full current schema
    CreateOnly,
}

impl SchemaCapability {
    pub fn supports_incremental_migration(&self) -> bool {
        matches!(self, Self::IncrementalMigration)
    }
}

/// Schema operations the bootstrapper drives
#[async_trait]
pub trait SchemaBackend: Send + Sync {
    fn capability(&self) -> SchemaCapability;

    /// Round-trip to the backend to prove it is reachable
    async fn ping(&self) -> Result<()>;

    /// Apply all pending migrations in order, returning how many were applied
    async fn apply_pending_migrations(&self) -> Result<usize>;

    /// Create every missing table from the current entity definitions.
    /// Calling it on an existing schema is a no-op.
    async fn create_schema_if_missing(&self) -> Result<()>;
}
