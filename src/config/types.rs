use std::path::Path;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::api::ApiConfig;
use super::logging::LoggingConfig;
use super::storage::StorageConfig;

pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";
pub const ENV_PREFIX: &str = "ITAM_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error loading configuration: {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("invalid logging.level '{0}'. Valid values: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
    #[error("api.timeout_in_ms must be greater than zero")]
    ZeroTimeout,
}

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: API endpoint, token storage and logging.
#[derive(Deserialize, Serialize, Debug, Clone, Default, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn extract(figment: Figment) -> Result<ConfigV1, ConfigError> {
    let config = figment
        .join(Serialized::default("version", "1.0.0"))
        .extract::<Config>()
        .map_err(Box::new)?;
    let config = match config {
        Config::ConfigV1(c) => c,
    };
    if config.api.timeout_in_ms == 0 {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(config)
}

/// Load config from a YAML file, with `ITAM_` environment variables on top
/// (`ITAM_API__BASE_URL` overrides `api.base_url`). A missing file yields defaults.
pub fn load_config(path: &Path) -> Result<ConfigV1, ConfigError> {
    extract(
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__")),
    )
}

/// Parse a config straight from YAML text, ignoring the environment.
pub fn config_from_str(yaml: &str) -> Result<ConfigV1, ConfigError> {
    extract(Figment::new().merge(Yaml::string(yaml)))
}

/// The JSON schema for the configuration file.
pub fn schema_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(Config))
}
