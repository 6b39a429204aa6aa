//! Layered configuration: defaults, YAML file, environment, command line

use clap::Parser;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prepare the WorkWell database before the API starts
#[derive(Debug, Parser)]
#[command(name = "workwell-bootstrap", version, about)]
pub struct Cli {
    /// YAML configuration file; missing files are ignored
    #[arg(short, long, default_value = "config/workwell.yaml")]
    pub config: PathBuf,

    /// Override store.database.url
    #[arg(long)]
    pub database_url: Option<String>,

    /// Override store.database.schema_mode (auto, migrate, create_only)
    #[arg(long)]
    pub schema_mode: Option<String>,

    /// Override store.seed.profile (full, minimal)
    #[arg(long)]
    pub seed_profile: Option<String>,

    /// Override logging.level (any tracing filter directive)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub store: workwell_store::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

pub fn figment(cli: &Cli) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
        .merge(Yaml::file(&cli.config))
        .merge(Env::prefixed("WORKWELL__").split("__"));

    let overrides = [
        ("store.database.url", &cli.database_url),
        ("store.database.schema_mode", &cli.schema_mode),
        ("store.seed.profile", &cli.seed_profile),
        ("logging.level", &cli.log_level),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            figment = figment.merge(Serialized::default(key, value));
        }
    }

    figment
}

pub fn load(cli: &Cli) -> anyhow::Result<AppConfig> {
    Ok(figment(cli).extract()?)
}
