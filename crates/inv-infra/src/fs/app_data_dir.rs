use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "inventory-h8";

/// Get the application data root directory.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/inventory-h8
/// - Windows: %APPDATA%\inventory-h8
/// - Linux: $XDG_DATA_HOME/inventory-h8 or ~/.local/share/inventory-h8
///
/// This function does not create directories; the caller decides when to.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to get platform-specific data directory")?;
    Ok(base_dir.join(APP_DIR_NAME))
}

/// Default location of the item table
pub fn default_data_file() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("inventory.csv"))
}

/// Default directory for rolling log files
pub fn logs_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("logs"))
}

/// Default location of the TOML configuration file
pub fn default_config_file() -> Result<PathBuf> {
    let base_dir =
        dirs::config_dir().context("Failed to get platform-specific config directory")?;
    Ok(base_dir.join(APP_DIR_NAME).join("config.toml"))
}
