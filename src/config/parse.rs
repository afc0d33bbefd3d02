//! Configuration file parsing and discovery

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["qrem.yml", "qrem.yaml"];

/// Find the configuration file in the current directory, then the user
/// config directory. A missing file is not an error; defaults apply.
pub fn find_config_file() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(proj) = ProjectDirs::from("", "", "qrem") {
        dirs.push(proj.config_dir().to_path_buf());
    }
    find_config_file_in(&dirs)
}

/// Find the configuration file within a fixed set of directories
pub fn find_config_file_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in dirs {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = dir.join(file_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }
    None
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> ConfigResult<Config> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> ConfigResult<Config> {
    // An empty document deserializes as null, not as a struct
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Invalid(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse configuration with automatic file discovery
pub fn parse_config_auto() -> ConfigResult<Config> {
    match find_config_file() {
        Some(path) => parse_config_file(&path),
        None => Ok(Config::default()),
    }
}

/// Validate a parsed configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.store.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "store binary name must not be empty".to_string(),
        ));
    }
    if config.list.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "list name must not be empty".to_string(),
        ));
    }
    if !(config.threshold > 0.0 && config.threshold <= 1.0) {
        return Err(ConfigError::ThresholdOutOfRange(config.threshold));
    }
    Ok(())
}
