//! In-memory fakes for the service ports, used by the unit tests.

use std::cell::RefCell;

use crate::domain::{AppError, Cell, Result, SharedFile, CANONICAL_HEADER};

use super::ports::{FileDirectory, Notify, TabularStore};

/// Scripted directory double recording removal calls.
pub struct FakeDirectory {
    email: String,
    files: Vec<SharedFile>,
    removed: RefCell<Vec<(String, String)>>,
    fail_removals: bool,
}

impl FakeDirectory {
    pub fn new(email: &str, files: Vec<SharedFile>) -> Self {
        Self {
            email: email.to_string(),
            files,
            removed: RefCell::new(Vec::new()),
            fail_removals: false,
        }
    }

    /// Make every `remove_editor` call fail, as a deleted file would.
    pub const fn failing_removals(mut self) -> Self {
        self.fail_removals = true;
        self
    }

    /// `(file_id, email)` pairs passed to `remove_editor`, in call order.
    pub fn removed(&self) -> Vec<(String, String)> {
        self.removed.borrow().clone()
    }
}

impl FileDirectory for FakeDirectory {
    fn active_user_email(&self) -> Result<String> {
        Ok(self.email.clone())
    }

    fn shared_with_me(&self) -> Result<Vec<SharedFile>> {
        Ok(self.files.clone())
    }

    fn remove_editor(&self, file_id: &str, email: &str) -> Result<()> {
        if self.fail_removals {
            return Err(AppError::Directory {
                message: format!("file not found: {file_id}"),
                source: None,
            });
        }
        self.removed
            .borrow_mut()
            .push((file_id.to_string(), email.to_string()));
        Ok(())
    }
}

/// In-memory sheet double; row 1 of the grid is the header.
pub struct FakeSheet {
    grid: RefCell<Vec<Vec<Cell>>>,
    clears: RefCell<usize>,
    row_writes: RefCell<Vec<(u32, Vec<Vec<Cell>>)>>,
    column_writes: RefCell<usize>,
}

impl FakeSheet {
    /// Sheet with no rows at all, not even a header.
    pub fn empty() -> Self {
        Self::with_rows(Vec::new(), Vec::new())
    }

    /// Sheet holding only the canonical header row.
    pub fn with_header() -> Self {
        let header = CANONICAL_HEADER.iter().map(|n| Cell::text(*n)).collect();
        Self::with_rows(header, Vec::new())
    }

    /// Sheet pre-populated with a header and data rows.
    pub fn with_rows(header: Vec<Cell>, rows: Vec<Vec<Cell>>) -> Self {
        let mut grid = Vec::new();
        if !header.is_empty() {
            grid.push(header);
        }
        grid.extend(rows);
        Self {
            grid: RefCell::new(grid),
            clears: RefCell::new(0),
            row_writes: RefCell::new(Vec::new()),
            column_writes: RefCell::new(0),
        }
    }

    pub fn clear_calls(&self) -> usize {
        *self.clears.borrow()
    }

    pub fn write_rows_calls(&self) -> Vec<(u32, Vec<Vec<Cell>>)> {
        self.row_writes.borrow().clone()
    }

    pub fn write_column_calls(&self) -> usize {
        *self.column_writes.borrow()
    }

    /// Cell at 1-based sheet row and 0-based column, `Empty` when absent.
    pub fn cell(&self, row: u32, column: usize) -> Cell {
        self.grid
            .borrow()
            .get(row as usize - 1)
            .and_then(|r| r.get(column))
            .cloned()
            .unwrap_or(Cell::Empty)
    }
}

impl TabularStore for FakeSheet {
    fn clear_data_rows(&self) -> Result<()> {
        let mut grid = self.grid.borrow_mut();
        grid.truncate(1);
        *self.clears.borrow_mut() += 1;
        Ok(())
    }

    fn write_rows(&self, start_row: u32, rows: &[Vec<Cell>]) -> Result<()> {
        let mut grid = self.grid.borrow_mut();
        for (offset, row) in rows.iter().enumerate() {
            let target = start_row as usize - 1 + offset;
            while grid.len() <= target {
                grid.push(Vec::new());
            }
            grid[target] = row.clone();
        }
        self.row_writes
            .borrow_mut()
            .push((start_row, rows.to_vec()));
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Vec<Cell>>> {
        Ok(self.grid.borrow().clone())
    }

    fn write_column(&self, start_row: u32, column: usize, values: &[Vec<Cell>]) -> Result<()> {
        let mut grid = self.grid.borrow_mut();
        for (offset, value) in values.iter().enumerate() {
            let target = start_row as usize - 1 + offset;
            while grid.len() <= target {
                grid.push(Vec::new());
            }
            let row = &mut grid[target];
            while row.len() <= column {
                row.push(Cell::Empty);
            }
            row[column] = value.first().cloned().unwrap_or(Cell::Empty);
        }
        *self.column_writes.borrow_mut() += 1;
        Ok(())
    }
}

/// Notifier double collecting toast messages.
#[derive(Default)]
pub struct FakeNotifier {
    messages: RefCell<Vec<String>>,
}

impl FakeNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notify for FakeNotifier {
    fn toast(&self, message: &str, _title: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
