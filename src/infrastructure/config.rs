//! Configuration file management.
//!
//! Handles loading the TOML configuration file and creating a commented
//! default on first run.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, Result};

/// Default configuration file content.
const DEFAULT_CONFIG: &str = r#"# share-sweep configuration
# Auto-generated - edit as needed

[spreadsheet]
# Spreadsheet id: the long token in the sheet URL,
# https://docs.google.com/spreadsheets/d/<id>/edit
id = ""

# Sheet (tab) name inside the spreadsheet
sheet = "Sheet1"

[drive]
# Path to the service-account key JSON file
# (defaults to ~/.share-sweep/credentials.json)
# credentials = "/path/to/credentials.json"

# Account to impersonate via domain-wide delegation (optional)
# impersonate = "user@example.com"
"#;

/// Load configuration, preferring an explicit path over the default one.
///
/// With no explicit path and no file at the default location, built-in
/// defaults are returned.
///
/// # Errors
/// Returns error if a file exists (or was named) but cannot be read or
/// parsed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config_from_file(path),
        None => {
            let default_path = AppConfig::config_file_path();
            if default_path.exists() {
                load_config_from_file(&default_path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

/// Create the default configuration file if it doesn't exist.
///
/// # Errors
/// Returns error if the file cannot be created.
pub fn ensure_config_exists() -> Result<()> {
    let config_path = AppConfig::config_file_path();

    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create config directory", e))?;
        }

        fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| AppError::io("Failed to create default config", e))?;

        tracing::info!(path = %config_path.display(), "Created default configuration");
    }

    Ok(())
}
