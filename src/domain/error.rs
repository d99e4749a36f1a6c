//! Domain-level error types for share-sweep.
//!
//! All errors are typed with `thiserror` and carry enough context to tell
//! the user which external surface (sheet, directory, config) failed.

use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration or environment error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required column is missing from the sheet header.
    #[error("Missing required column in header row: {name}")]
    MissingColumn { name: String },

    /// Invalid or unusable data in a sheet row.
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// Google Drive call failed.
    #[error("Drive error: {message}")]
    Directory {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Google Sheets call failed.
    #[error("Sheets error: {message}")]
    Sheet {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication against the Google APIs failed.
    #[error("Auth error: {message}")]
    Auth {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a directory error from a Drive client error.
    pub fn directory(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Directory {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Create a sheet error from a Sheets client error.
    pub fn sheet(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Sheet {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Create an auth error with context.
    pub fn auth(
        message: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Auth {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }

    /// Create a missing-column error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn { name: name.into() }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
