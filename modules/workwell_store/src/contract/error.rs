//! Contract error types for the store bootstrap
//!
//! Repositories report failures as `anyhow::Error`; the bootstrapper classifies
//! them into these variants and keeps the original error as the source.

/// Collection touched by a failing seed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedEntity {
    Company,
    Department,
}

impl std::fmt::Display for SeedEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Company => f.write_str("company"),
            Self::Department => f.write_str("department"),
        }
    }
}

/// Bootstrap failures
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// A migration step could not be applied; startup must not continue
    #[error("Schema migration failed: {0:#}")]
    SchemaMigration(#[source] anyhow::Error),

    /// Full-schema creation failed on a create-only backend
    #[error("Schema creation failed: {0:#}")]
    SchemaCreation(#[source] anyhow::Error),

    /// Insert or commit of a baseline row failed
    #[error("Failed to write default {entity}: {source:#}")]
    SeedWrite {
        entity: SeedEntity,
        #[source]
        source: anyhow::Error,
    },

    /// Existence check or id lookup failed while seeding
    #[error("Failed to query {entity} collection: {source:#}")]
    SeedQuery {
        entity: SeedEntity,
        #[source]
        source: anyhow::Error,
    },

    /// The backend could not be reached
    #[error("Database backend unavailable: {0:#}")]
    BackendUnavailable(#[source] anyhow::Error),
}

impl BootstrapError {
    /// Whether startup has to stop on this error
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::SchemaMigration(_) | Self::SchemaCreation(_) | Self::BackendUnavailable(_)
        )
    }
}
