//! WorkWell Store
//!
//! Entities, migrations and repositories for companies, departments, users,
//! chat conversations and meditation sessions, plus the startup bootstrap that
//! guarantees a usable schema and a baseline company/department.

// Public exports
pub mod contract;
pub use contract::{BootstrapError, SeedEntity};

pub mod module;
pub use module::{connect, WorkWellStore};

pub mod config;
pub use config::{Config, DatabaseConfig, SchemaMode, SeedConfig};

pub mod domain;
pub use domain::{
    BootstrapReport, Bootstrapper, SchemaAction, SchemaCapability, SeedOutcome, SeedProfile,
};

pub mod testing;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;
