//! # Configuration Loader
//!
//! Reads the TOML file into [`FlowConfig`]. Pure data loading: missing keys
//! keep their defaults and no value is validated here.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use mood_core::FlowConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "MOODAI_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<FlowConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    Ok(FlowConfig::from_toml(&toml_value))
}

/// Load the file named by `MOODAI_CONFIG`, or fall back to defaults when it is unset.
pub fn resolve_config() -> anyhow::Result<FlowConfig> {
    resolve_config_from(std::env::var_os(CONFIG_ENV_VAR))
}

fn resolve_config_from(config_path: Option<OsString>) -> anyhow::Result<FlowConfig> {
    match config_path {
        Some(path) if !path.is_empty() => load_config(PathBuf::from(path)),
        _ => Ok(FlowConfig::default()),
    }
}
