//! # Configuration Loader
//!
//! Reads the TOML file into the [`AppConfig`] DTO. Pure data loading: no
//! validation and no defaults. Defaults are resolved in [`super::wiring`].

use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

use inv_core::config::AppConfig;
use inv_infra::fs::default_config_file;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    AppConfig::from_toml(&toml_value)
}

/// Load the file named on the command line, or the default file if it exists.
///
/// An explicitly named file must exist. The default file is optional: when it is
/// absent (or no config directory can be determined) the empty config is used.
pub fn load_config_or_default(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_file() {
        Ok(path) if path.is_file() => load_config(path),
        Ok(path) => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(AppConfig::empty())
        }
        Err(err) => {
            debug!(error = %err, "config directory unavailable, using defaults");
            Ok(AppConfig::empty())
        }
    }
}
