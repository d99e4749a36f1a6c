//! Infrastructure layer - Google API adapters, config and terminal output.
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod drive_directory;
pub mod notifier;
pub mod sheets_store;

pub use config::{ensure_config_exists, load_config};
pub use drive_directory::DriveDirectory;
pub use notifier::TermNotifier;
pub use sheets_store::SheetsStore;
