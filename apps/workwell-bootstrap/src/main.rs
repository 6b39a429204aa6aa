//! WorkWell bootstrap
//!
//! Loads configuration, connects to the database, brings the schema up to date
//! and seeds the baseline company and department. Exits non-zero on failure so
//! deployment pipelines stop before the API starts.

mod config;
mod logging;

use clap::Parser;
use std::process::ExitCode;
use workwell_store::{BootstrapError, WorkWellStore};

use crate::config::{AppConfig, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("workwell-bootstrap: invalid configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("workwell-bootstrap: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, fatal = e.is_fatal(), "Database bootstrap failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), BootstrapError> {
    tracing::info!(
        url = %config.store.database.url,
        schema_mode = ?config.store.database.schema_mode,
        profile = ?config.store.seed.profile,
        "Starting database bootstrap"
    );

    let store = WorkWellStore::init(config.store).await?;
    store.ensure_ready().await?;
    Ok(())
}
