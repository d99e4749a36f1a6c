//! Domain layer - core types and errors.
//!
//! This layer contains pure domain models and error types
//! without any external dependencies (network, IO, etc.).

pub mod error;
pub mod models;
pub mod settings;

pub use error::{AppError, Result};
pub use models::{
    Cell, FileRecord, SharedFile, CANONICAL_HEADER, FLAG_COLUMN, REMOVED_MARKER, UNKNOWN_OWNER,
};
pub use settings::{AppConfig, DriveConfig, SpreadsheetConfig};
