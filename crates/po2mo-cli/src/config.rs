use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "po2mo.toml";

/// Default paths for the `compile` command. Positional arguments take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub input: Option<String>,
    pub output: Option<String>,
    pub report: Option<String>,
}

pub fn load_config(path: &Path) -> Result<CliConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}

pub fn resolve_path(config_path: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_absolute() {
        return path;
    }
    config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(path)
}
