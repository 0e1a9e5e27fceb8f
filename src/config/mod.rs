//! Application configuration.
//!
//! One `Config` covers all three processes; each binary reads the section
//! it needs. Loaded from YAML files and environment variables.

mod server;

pub use server::{ApiConfig, BackendConfig};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "RACEBOOK_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "RACEBOOK";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "RACEBOOK_LOG";

use serde::Deserialize;

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP gateway.
    pub api: ApiConfig,
    /// Racing backend.
    pub racing: BackendConfig,
    /// Sports backend.
    pub sports: BackendConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            racing: BackendConfig::racing(),
            sports: BackendConfig::sports(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `config.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, `__` separated
    ///    (`RACEBOOK__RACING__ENDPOINT`)
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let defaults = Config::default();
        let mut builder = ConfigLib::builder()
            .set_default("api.endpoint", defaults.api.endpoint)?
            .set_default("racing.endpoint", defaults.racing.endpoint)?
            .set_default("racing.database", defaults.racing.database)?
            .set_default("racing.seed_demo_data", defaults.racing.seed_demo_data)?
            .set_default("sports.endpoint", defaults.sports.endpoint)?
            .set_default("sports.database", defaults.sports.database)?
            .set_default("sports.seed_demo_data", defaults.sports.seed_demo_data)?
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        Ok(config)
    }
}
