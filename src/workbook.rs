use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{LedgerupError, Result};
use crate::models::{Cell, RawRow};

const ACCEPTED_EXTENSIONS: &[&str] = &["xlsx", "xls"];

pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// The first worksheet, split into header and data rows.
#[derive(Debug)]
pub struct SheetRows {
    pub header: Vec<Cell>,
    pub rows: Vec<RawRow>,
}

/// Read the first worksheet of an `.xlsx`/`.xls` file. Sheet row 1 is the
/// header; data rows keep their true sheet row number. Rows where every cell
/// is blank are skipped and never counted.
///
/// The extension gate runs before any parse attempt, so a rejected file is
/// never opened as a workbook.
pub fn read_rows(path: &Path) -> Result<SheetRows> {
    if !is_spreadsheet(path) {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("(unnamed)")
            .to_string();
        return Err(LedgerupError::UnsupportedFileType(name));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LedgerupError::Other("workbook has no sheets".to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut header = Vec::new();
    let mut rows = Vec::new();
    for (idx, row) in range.rows().enumerate() {
        let cells: Vec<Cell> = row.iter().map(convert_cell).collect();
        if idx == 0 {
            header = cells;
            continue;
        }
        if cells.iter().all(Cell::is_blank) {
            continue;
        }
        rows.push(RawRow {
            source_row: idx + 1,
            cells,
        });
    }

    Ok(SheetRows { header, rows })
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}
