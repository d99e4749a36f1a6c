//! Ports consumed by the orchestrators.
//!
//! The sheet, the file directory and the notification surface are ambient
//! globals in the original spreadsheet-bound setup; here they are explicit
//! trait parameters so the services can run against test doubles.

use crate::domain::{Cell, Result, SharedFile};

/// Rectangular access to the active sheet.
///
/// Row numbers are 1-based like the sheet itself; row 1 is the header and is
/// never cleared. Column indexes are 0-based.
pub trait TabularStore {
    /// Clear every data row (row 2 downward), leaving the header intact.
    fn clear_data_rows(&self) -> Result<()>;

    /// Write rows as one batched update starting at `start_row`.
    fn write_rows(&self, start_row: u32, rows: &[Vec<Cell>]) -> Result<()>;

    /// Read the full data range, header included. Rows may be ragged; short
    /// rows mean trailing empty cells.
    fn read_all(&self) -> Result<Vec<Vec<Cell>>>;

    /// Write a single column as one batched update starting at `start_row`.
    /// `values` is column-shaped: one single-element row per sheet row.
    fn write_column(&self, start_row: u32, column: usize, values: &[Vec<Cell>]) -> Result<()>;
}

/// The external file directory (Drive).
pub trait FileDirectory {
    /// Email of the identity the client runs as.
    fn active_user_email(&self) -> Result<String>;

    /// All files shared with the active identity, in the directory's order.
    fn shared_with_me(&self) -> Result<Vec<SharedFile>>;

    /// Remove `email` from the editors of the file `file_id`.
    ///
    /// Fails when the file cannot be fetched or the email holds no editor
    /// permission on it.
    fn remove_editor(&self, file_id: &str, email: &str) -> Result<()>;
}

/// Transient user-visible notification, the stand-in for the host toast.
pub trait Notify {
    fn toast(&self, message: &str, title: &str);
}
