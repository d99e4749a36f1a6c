//! Row/column codec for header-named sheet access.
//!
//! All sheet logic resolves columns by header name, never by fixed position,
//! so users may reorder columns between the scan and revoke passes.

use std::collections::HashMap;

use crate::domain::Cell;

/// Normalize a header name into a record field key: lower-cased, whitespace
/// replaced with underscores. `"Owner Email"` becomes `"owner_email"`.
#[must_use]
pub fn normalize_header(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Position of `name` in the header, matched exactly (case-sensitive).
#[must_use]
pub fn column_index(header: &[Cell], name: &str) -> Option<usize> {
    header.iter().position(|cell| cell.as_text() == name)
}

/// Decode a data row into a map keyed by normalized header names.
///
/// Rows read from the sheet can be shorter than the header (trailing empty
/// cells are trimmed by the API); missing cells decode as [`Cell::Empty`].
#[must_use]
pub fn decode_row(row: &[Cell], header: &[Cell]) -> HashMap<String, Cell> {
    header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let value = row.get(i).cloned().unwrap_or(Cell::Empty);
            (normalize_header(name.as_text()), value)
        })
        .collect()
}

/// Project the named column into a column-shaped buffer suitable for a
/// batched single-column write: one single-element row per data row.
#[must_use]
pub fn project_column(header: &[Cell], rows: &[Vec<Cell>], name: &str) -> Vec<Vec<Cell>> {
    let Some(index) = column_index(header, name) else {
        return Vec::new();
    };

    rows.iter()
        .map(|row| vec![row.get(index).cloned().unwrap_or(Cell::Empty)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<Cell> {
        names.iter().map(|n| Cell::text(*n)).collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("RemoveMe"), "removeme");
        assert_eq!(normalize_header("Owner Email"), "owner_email");
        assert_eq!(normalize_header("Me  Edit"), "me_edit");
    }

    #[test]
    fn test_column_index_exact_match() {
        let header = header(&["RemoveMe", "Id"]);
        assert_eq!(column_index(&header, "Id"), Some(1));
        assert_eq!(column_index(&header, "id"), None);
        assert_eq!(column_index(&header, "Missing"), None);
    }

    #[test]
    fn test_decode_row() {
        let header = header(&["RemoveMe", "Id", "MeEdit"]);
        let row = vec![Cell::text("x"), Cell::text("f1"), Cell::Bool(true)];

        let record = decode_row(&row, &header);
        assert_eq!(record["removeme"], Cell::text("x"));
        assert_eq!(record["id"], Cell::text("f1"));
        assert_eq!(record["meedit"], Cell::Bool(true));
    }

    #[test]
    fn test_decode_short_row_pads_empty() {
        let header = header(&["RemoveMe", "Id", "MeEdit"]);
        let row = vec![Cell::text("x")];

        let record = decode_row(&row, &header);
        assert_eq!(record["id"], Cell::Empty);
        assert_eq!(record["meedit"], Cell::Empty);
    }

    #[test]
    fn test_project_column_shape() {
        let header = header(&["RemoveMe", "Id"]);
        let rows = vec![
            vec![Cell::text("x"), Cell::text("f1")],
            vec![Cell::Empty, Cell::text("f2")],
            vec![Cell::text("x")],
        ];

        let column = project_column(&header, &rows, "Id");
        assert_eq!(
            column,
            vec![
                vec![Cell::text("f1")],
                vec![Cell::text("f2")],
                vec![Cell::Empty],
            ]
        );
    }

    #[test]
    fn test_project_missing_column_is_empty() {
        let header = header(&["Id"]);
        let rows = vec![vec![Cell::text("f1")]];
        assert!(project_column(&header, &rows, "Missing").is_empty());
    }
}
