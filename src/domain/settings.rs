//! Application configuration.
//!
//! TOML-backed settings naming the spreadsheet to use as the control surface
//! and the service-account credentials for the Google APIs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Spreadsheet selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetConfig {
    /// Spreadsheet id (the long token in the sheet URL).
    #[serde(default)]
    pub id: String,

    /// Sheet (tab) name inside the spreadsheet.
    #[serde(default = "default_sheet")]
    pub sheet: String,
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            sheet: default_sheet(),
        }
    }
}

fn default_sheet() -> String {
    "Sheet1".to_string()
}

/// Drive access configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Path to the service-account key JSON file.
    #[serde(default = "default_credentials")]
    pub credentials: PathBuf,

    /// Account to impersonate (domain-wide delegation). When unset, the
    /// service account itself is the active identity.
    #[serde(default)]
    pub impersonate: Option<String>,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            credentials: default_credentials(),
            impersonate: None,
        }
    }
}

fn default_credentials() -> PathBuf {
    AppConfig::default_data_dir().join("credentials.json")
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Spreadsheet selection.
    #[serde(default)]
    pub spreadsheet: SpreadsheetConfig,

    /// Drive access configuration.
    #[serde(default)]
    pub drive: DriveConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".share-sweep")
    }

    /// Get the config file path.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }

    /// Validate that the config names a spreadsheet.
    ///
    /// # Errors
    /// Returns a configuration error when the spreadsheet id is empty.
    pub fn require_spreadsheet(&self) -> super::Result<()> {
        if self.spreadsheet.id.trim().is_empty() {
            return Err(super::AppError::Config {
                message: "spreadsheet.id is not set; edit the config file (see `share-sweep paths`)"
                    .into(),
            });
        }
        Ok(())
    }
}
