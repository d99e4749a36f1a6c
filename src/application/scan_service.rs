//! Scan pass: inventory files shared with the active identity.
//!
//! Clears the data rows of the sheet and rewrites them from a fresh
//! directory query, one row per shared file.

use crate::domain::{FileRecord, Result};

use super::ports::{FileDirectory, Notify, TabularStore};

/// First data row; row 1 holds the header.
const DATA_START_ROW: u32 = 2;

/// Orchestrates the scan pass over the directory and the sheet.
pub struct ScanService<'a, D, S, N> {
    directory: &'a D,
    store: &'a S,
    notifier: &'a N,
}

impl<'a, D, S, N> ScanService<'a, D, S, N>
where
    D: FileDirectory,
    S: TabularStore,
    N: Notify,
{
    pub const fn new(directory: &'a D, store: &'a S, notifier: &'a N) -> Self {
        Self {
            directory,
            store,
            notifier,
        }
    }

    /// Run the scan pass and return the number of files found.
    ///
    /// Every run fully overwrites the data rows; any flags from a previous
    /// pass are discarded. With zero shared files the clear still happens
    /// but nothing is written.
    ///
    /// # Errors
    /// Fails fast on the first directory or sheet error; rows written before
    /// the failure are left in place.
    pub fn scan(&self) -> Result<usize> {
        self.store.clear_data_rows()?;

        let email = self.directory.active_user_email()?;
        tracing::debug!(%email, "scanning files shared with the active identity");

        let files = self.directory.shared_with_me()?;
        let rows: Vec<_> = files
            .iter()
            .map(|file| FileRecord::from_shared(file, &email).into_row())
            .collect();

        if !rows.is_empty() {
            self.store.write_rows(DATA_START_ROW, &rows)?;
        }

        tracing::info!(found = rows.len(), "scan completed");
        self.notifier
            .toast(&format!("Found {} shared files", rows.len()), "Status");

        Ok(rows.len())
    }
}
