//! Revoke pass: act on user-edited flags and drop editor permissions.
//!
//! Reads back the sheet written by the scan pass, revokes the active
//! identity's editor right on every row whose flag is marked and whose
//! `MeEdit` cell is true, then writes the completion markers back in one
//! batched column update.

use crate::domain::{AppError, Cell, Result, FLAG_COLUMN, REMOVED_MARKER};

use super::codec::{column_index, decode_row, normalize_header, project_column};
use super::ports::{FileDirectory, Notify, TabularStore};

/// First data row; row 1 holds the header.
const DATA_START_ROW: u32 = 2;

/// Header names the revoke pass cannot work without. `RemoveMe` is matched
/// exactly; the others through their normalized field keys.
const REQUIRED_FIELDS: [&str; 2] = ["Id", "MeEdit"];

/// Orchestrates the revoke pass over the sheet and the directory.
pub struct RevokeService<'a, D, S, N> {
    directory: &'a D,
    store: &'a S,
    notifier: &'a N,
}

impl<'a, D, S, N> RevokeService<'a, D, S, N>
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

    /// Run the revoke pass and return the number of permissions removed.
    ///
    /// A row is eligible when its flag cell is marked and its `MeEdit` cell
    /// is true. Eligible rows get the completion marker in the flag column;
    /// every other row keeps its original flag value. The column write only
    /// happens when at least one permission was removed.
    ///
    /// # Errors
    /// Fails fast: a missing required column aborts before any directory
    /// call, and the first failed removal aborts the pass without writing
    /// markers back (no per-row isolation, no retry).
    pub fn revoke(&self) -> Result<usize> {
        let email = self.directory.active_user_email()?;
        self.notifier.toast("Working...", "Status");

        let mut data = self.store.read_all()?;
        if data.is_empty() {
            return Err(AppError::Config {
                message: "sheet is empty; run `share-sweep scan` first".into(),
            });
        }
        let header = data.remove(0);

        let flag_column = column_index(&header, FLAG_COLUMN)
            .ok_or_else(|| AppError::missing_column(FLAG_COLUMN))?;
        Self::check_required_fields(&header)?;

        let flag_key = normalize_header(FLAG_COLUMN);
        let mut flags = project_column(&header, &data, FLAG_COLUMN);
        let mut removed = 0_usize;

        for (index, row) in data.iter().enumerate() {
            let record = decode_row(row, &header);

            let marked = record.get(flag_key.as_str()).is_some_and(Cell::is_marked);
            let me_edit = record.get("meedit").is_some_and(Cell::is_truthy);
            if !(marked && me_edit) {
                continue;
            }

            let id = record.get("id").map(ToString::to_string).unwrap_or_default();
            if id.trim().is_empty() {
                return Err(AppError::InvalidData {
                    message: format!("row {} is marked but has no Id", index as u32 + DATA_START_ROW),
                });
            }

            self.directory.remove_editor(&id, &email)?;
            tracing::debug!(file_id = %id, "removed editor permission");

            removed += 1;
            flags[index] = vec![Cell::text(REMOVED_MARKER)];
        }

        if removed > 0 {
            self.store
                .write_column(DATA_START_ROW, flag_column, &flags)?;
        }

        tracing::info!(removed, "revoke completed");
        self.notifier
            .toast(&format!("Removed {removed} editor permissions"), "Status");

        Ok(removed)
    }

    /// Fail fast when a required column is absent instead of decoding rows
    /// against an index that does not exist.
    fn check_required_fields(header: &[Cell]) -> Result<()> {
        for name in REQUIRED_FIELDS {
            let key = normalize_header(name);
            let present = header
                .iter()
                .any(|cell| normalize_header(cell.as_text()) == key);
            if !present {
                return Err(AppError::missing_column(name));
            }
        }
        Ok(())
    }
}
