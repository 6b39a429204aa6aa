//! Configuration for the WorkWell store

use crate::domain::{SchemaCapability, SeedProfile};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Store configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

/// How the schema step picks its branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaMode {
    /// In-memory SQLite creates the schema, everything else migrates
    #[default]
    Auto,
    Migrate,
    CreateOnly,
}

/// Database connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL (sqlite:// or postgres://)
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub schema_mode: SchemaMode,

    /// Pool size; in-memory SQLite always uses a single connection
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub acquire_timeout: Duration,

    /// Log every SQL statement through sqlx
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            schema_mode: SchemaMode::default(),
            max_connections: default_max_connections(),
            connect_timeout: default_timeout(),
            acquire_timeout: default_timeout(),
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    /// Whether the URL points at an in-memory SQLite database
    pub fn is_in_memory(&self) -> bool {
        let url = self.url.to_ascii_lowercase();
        url.starts_with("sqlite") && (url.contains(":memory:") || url.contains("mode=memory"))
    }

    /// Resolve the configured mode against the URL
    pub fn schema_capability(&self) -> SchemaCapability {
        match self.schema_mode {
            SchemaMode::Migrate => SchemaCapability::IncrementalMigration,
            SchemaMode::CreateOnly => SchemaCapability::CreateOnly,
            SchemaMode::Auto if self.is_in_memory() => SchemaCapability::CreateOnly,
            SchemaMode::Auto => SchemaCapability::IncrementalMigration,
        }
    }

    /// Effective pool size
    pub fn pool_size(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.max_connections.max(1)
        }
    }

    /// Idle timeout and maximum lifetime for pooled connections.
    ///
    /// An in-memory database lives only as long as its connection, so the
    /// pool must never recycle it. `None` keeps the driver defaults.
    pub fn connection_lifetime(&self) -> Option<Duration> {
        self.is_in_memory().then_some(IN_MEMORY_CONNECTION_LIFETIME)
    }
}

/// Effectively unbounded; the pool keeps its single connection for the process lifetime
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Baseline seeding settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub profile: SeedProfile,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            profile: SeedProfile::default(),
        }
    }
}

fn default_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_true() -> bool {
    true
}
