//! Domain models for the shared-file inventory.
//!
//! The spreadsheet is both the display and the control surface: one row per
//! shared file, with a user-editable flag column driving the revoke pass.

/// Header name of the user-editable flag column.
pub const FLAG_COLUMN: &str = "RemoveMe";

/// Literal marker written into the flag column once a row has been processed.
pub const REMOVED_MARKER: &str = "ReMoVeD";

/// Sentinel written when a file reports no owner.
pub const UNKNOWN_OWNER: &str = " --- ";

/// Canonical header row written by `init`, in the column order produced by a
/// scan. The revoke pass locates columns by name, so users may reorder them.
pub const CANONICAL_HEADER: [&str; 7] =
    ["RemoveMe", "Name", "Id", "Type", "Owner", "Url", "MeEdit"];

/// A single spreadsheet cell value.
///
/// Booleans are kept as booleans so the `MeEdit` column round-trips without
/// string comparisons against `"TRUE"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Empty (or blank) cell.
    Empty,
    /// Boolean cell value.
    Bool(bool),
    /// Numeric cell value.
    Number(f64),
    /// Text cell value.
    Text(String),
}

impl Cell {
    /// Text content of the cell, empty for non-text cells.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s.as_str(),
            _ => "",
        }
    }

    /// Whether the cell reads as boolean-true.
    ///
    /// `Bool(true)`, nonzero numbers and the text `"true"` (any case) count;
    /// everything else is false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }

    /// Whether a flag-column cell marks its row for removal.
    ///
    /// Any non-blank user entry counts, except explicit negatives
    /// (`false`/`no`/`0`) and the completion marker, so re-running the revoke
    /// pass does not retry rows it already processed.
    #[must_use]
    pub fn is_marked(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => {
                let t = s.trim();
                !t.is_empty()
                    && !t.eq_ignore_ascii_case("false")
                    && !t.eq_ignore_ascii_case("no")
                    && t != "0"
                    && !t.eq_ignore_ascii_case(REMOVED_MARKER)
            }
        }
    }

    /// Text cell from anything stringy.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A file as reported by the external directory (Drive).
#[derive(Debug, Clone, Default)]
pub struct SharedFile {
    /// Stable identifier assigned by the directory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// Owner's email, if the file reports an owner.
    pub owner_email: Option<String>,
    /// Browser URL.
    pub url: String,
    /// Emails of identities currently holding editor rights.
    pub editors: Vec<String>,
}

impl SharedFile {
    /// Whether the given email currently holds editor rights (exact match).
    #[must_use]
    pub fn has_editor(&self, email: &str) -> bool {
        self.editors.iter().any(|e| e == email)
    }
}

/// One data row of the inventory sheet, as written by a scan.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub name: String,
    pub id: String,
    pub mime_type: String,
    pub owner_email: String,
    pub url: String,
    /// Whether the active identity held editor rights at scan time.
    pub me_edit: bool,
}

impl FileRecord {
    /// Build a record for the active identity from a directory file.
    #[must_use]
    pub fn from_shared(file: &SharedFile, active_email: &str) -> Self {
        Self {
            me_edit: file.has_editor(active_email),
            name: file.name.clone(),
            id: file.id.clone(),
            mime_type: file.mime_type.clone(),
            owner_email: file
                .owner_email
                .clone()
                .unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
            url: file.url.clone(),
        }
    }

    /// Row cells in canonical column order, flag cell left empty.
    #[must_use]
    pub fn into_row(self) -> Vec<Cell> {
        vec![
            Cell::Empty,
            Cell::Text(self.name),
            Cell::Text(self.id),
            Cell::Text(self.mime_type),
            Cell::Text(self.owner_email),
            Cell::Text(self.url),
            Cell::Bool(self.me_edit),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_not_marked() {
        assert!(!Cell::Empty.is_marked());
        assert!(!Cell::Text("   ".into()).is_marked());
    }

    #[test]
    fn test_user_entries_marked() {
        assert!(Cell::Text("x".into()).is_marked());
        assert!(Cell::Text(" yes ".into()).is_marked());
        assert!(Cell::Bool(true).is_marked());
        assert!(Cell::Number(1.0).is_marked());
    }

    #[test]
    fn test_explicit_negatives_not_marked() {
        assert!(!Cell::Text("false".into()).is_marked());
        assert!(!Cell::Text("No".into()).is_marked());
        assert!(!Cell::Text("0".into()).is_marked());
        assert!(!Cell::Bool(false).is_marked());
        assert!(!Cell::Number(0.0).is_marked());
    }

    #[test]
    fn test_completion_marker_not_marked() {
        assert!(!Cell::Text(REMOVED_MARKER.into()).is_marked());
        assert!(!Cell::Text("removed".into()).is_marked());
    }

    #[test]
    fn test_truthy() {
        assert!(Cell::Bool(true).is_truthy());
        assert!(Cell::Text("TRUE".into()).is_truthy());
        assert!(!Cell::Text("yes".into()).is_truthy());
        assert!(!Cell::Empty.is_truthy());
    }

    #[test]
    fn test_record_owner_sentinel() {
        let file = SharedFile {
            id: "f1".into(),
            name: "doc".into(),
            ..Default::default()
        };
        let record = FileRecord::from_shared(&file, "me@example.com");
        assert_eq!(record.owner_email, UNKNOWN_OWNER);
        assert!(!record.me_edit);
    }

    #[test]
    fn test_editor_match_is_exact() {
        let file = SharedFile {
            editors: vec!["Me@example.com".into()],
            ..Default::default()
        };
        assert!(!file.has_editor("me@example.com"));
        assert!(file.has_editor("Me@example.com"));
    }

    #[test]
    fn test_row_shape() {
        let file = SharedFile {
            id: "f1".into(),
            name: "doc".into(),
            mime_type: "text/plain".into(),
            owner_email: Some("owner@example.com".into()),
            url: "https://example.com/f1".into(),
            editors: vec!["me@example.com".into()],
        };
        let row = FileRecord::from_shared(&file, "me@example.com").into_row();
        assert_eq!(row.len(), CANONICAL_HEADER.len());
        assert_eq!(row[0], Cell::Empty);
        assert_eq!(row[2], Cell::Text("f1".into()));
        assert_eq!(row[6], Cell::Bool(true));
    }
}
