use serde::{Deserialize, Serialize};

/// A single cell as read from the workbook, untyped until validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Raw presence check: an empty cell or an empty string is blank.
    /// Whitespace-only text counts as present — the per-field rules trim.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Trimmed display text. Whole numbers render without a decimal point.
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// One data row from the first worksheet, indexed by position:
/// 0 = name, 1 = head, 2 = group, 3 = balance, 4 = balance type.
///
/// `source_row` is the 1-based sheet row (header = 1), carried from the
/// reader onward so error reports point at the real spreadsheet line even
/// after rows have been filtered out.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub source_row: usize,
    pub cells: Vec<Cell>,
}

impl RawRow {
    pub fn cell(&self, idx: usize) -> &Cell {
        self.cells.get(idx).unwrap_or(&Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// True sheet row (1-based, header = 1); 0 for file-level problems.
    pub row: usize,
    pub field: &'static str,
    pub message: String,
}

/// Snapshot of a validated workbook. This is what gates uploading:
/// submission is only permitted when `errors` is empty and `valid_rows` is
/// positive.
#[derive(Debug)]
pub struct ValidationReport {
    /// Structurally complete rows (name, head, group all present).
    pub data: Vec<RawRow>,
    pub errors: Vec<ValidationError>,
    /// All non-header rows, whether or not they passed the structural filter.
    pub total_rows: usize,
    /// `data.len() - errors.len()`. Signed: a row can carry several errors,
    /// so the difference may go negative. The arithmetic is the contract.
    pub valid_rows: i64,
}

impl ValidationReport {
    pub fn is_uploadable(&self) -> bool {
        self.errors.is_empty() && self.valid_rows > 0
    }

    /// Wrap a file-level failure (unreadable workbook bytes) in the same
    /// shape the row-error rendering path consumes.
    pub fn file_error(message: impl Into<String>) -> Self {
        ValidationReport {
            data: Vec::new(),
            errors: vec![ValidationError {
                row: 0,
                field: "File",
                message: message.into(),
            }],
            total_rows: 0,
            valid_rows: 0,
        }
    }
}

/// Canonical request shape for one account, derived 1:1 from a structurally
/// valid row at submission time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSubmission {
    pub name: String,
    pub account_type: String,
    pub account_group: String,
    pub balance: f64,
    pub balance_type: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UploadOptions {
    pub create_hierarchy: bool,
    pub overwrite_existing: bool,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<UploadCounts>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UploadCounts {
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub updated: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}
