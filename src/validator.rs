use crate::models::{Cell, RawRow, ValidationError, ValidationReport};
use crate::workbook::SheetRows;

/// Column labels the header row must carry, in template order. Matching is
/// permissive: a label is satisfied when any header cell contains it,
/// case-insensitively, so suffixes and units in header text are tolerated.
/// Values are still read by fixed position 0..4, not by matched header.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Account Name",
    "Account Head",
    "Account Group",
    "Balance",
    "Balance Type",
];

/// Validate the sheet against the chart-of-accounts schema.
///
/// Runs in two stages: the header gate first (missing columns fail fast with
/// a single file-level error and no row validation), then the structural
/// filter and per-row field rules. Rows missing name, head, or group are
/// dropped silently; field rules only ever see structurally complete rows.
pub fn validate(sheet: &SheetRows) -> ValidationReport {
    let total_rows = sheet.rows.len();

    let missing = missing_columns(&sheet.header);
    if !missing.is_empty() {
        return ValidationReport {
            data: Vec::new(),
            errors: vec![ValidationError {
                row: 0,
                field: "File",
                message: format!("Missing required columns: {}", missing.join(", ")),
            }],
            total_rows,
            valid_rows: 0,
        };
    }

    let data: Vec<RawRow> = sheet
        .rows
        .iter()
        .filter(|row| is_structurally_complete(row))
        .cloned()
        .collect();

    let mut errors = Vec::new();
    for row in &data {
        if row.cell(0).text().is_empty() {
            errors.push(row_error(row, "Account Name", "Account name is required"));
        }
        if row.cell(1).text().is_empty() {
            errors.push(row_error(row, "Account Head", "Account head is required"));
        }
        if row.cell(2).text().is_empty() {
            errors.push(row_error(row, "Account Group", "Account group is required"));
        }
        let balance = row.cell(3);
        if !balance.is_blank() && balance.as_number().is_none() {
            errors.push(row_error(row, "Balance", "Balance must be a valid number"));
        }
        // Position 4 (balance type) is never validated: absence and unknown
        // values both fall back to "debit" at mapping time.
    }

    let valid_rows = data.len() as i64 - errors.len() as i64;
    ValidationReport {
        data,
        errors,
        total_rows,
        valid_rows,
    }
}

fn missing_columns(header: &[Cell]) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| {
            let want = required.to_lowercase();
            !header
                .iter()
                .any(|cell| cell.text().to_lowercase().contains(&want))
        })
        .collect()
}

/// A row takes part in validation only when name, head, and group are all
/// present (raw presence, untrimmed — a whitespace-only cell passes here and
/// is caught by the field rules instead).
fn is_structurally_complete(row: &RawRow) -> bool {
    row.cells.len() >= 3
        && !row.cell(0).is_blank()
        && !row.cell(1).is_blank()
        && !row.cell(2).is_blank()
}

fn row_error(row: &RawRow, field: &'static str, message: &str) -> ValidationError {
    ValidationError {
        row: row.source_row,
        field,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(source_row: usize, values: &[&str]) -> RawRow {
        RawRow {
            source_row,
            cells: values
                .iter()
                .map(|v| {
                    if v.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(v.to_string())
                    }
                })
                .collect(),
        }
    }

    fn sheet(header: &[&str], rows: Vec<RawRow>) -> SheetRows {
        SheetRows {
            header: header.iter().map(|h| Cell::Text(h.to_string())).collect(),
            rows,
        }
    }

    fn full_header() -> Vec<&'static str> {
        REQUIRED_COLUMNS.to_vec()
    }

    #[test]
    fn test_missing_header_fails_fast_with_single_file_error() {
        let sheet = sheet(
            &["Account Name", "Balance"],
            vec![text_row(2, &["", "", "", "abc", ""])],
        );
        let report = validate(&sheet);
        assert!(report.data.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].row, 0);
        assert_eq!(report.errors[0].field, "File");
        assert_eq!(
            report.errors[0].message,
            "Missing required columns: Account Head, Account Group, Balance Type"
        );
        // No row-level validation ran, even though the row has a bad balance.
        assert_eq!(report.total_rows, 1);
        assert!(!report.is_uploadable());
    }

    #[test]
    fn test_header_match_is_substring_and_case_insensitive() {
        let sheet = sheet(
            &[
                "ACCOUNT NAME *",
                "account head (category)",
                "Account Group / Subtype",
                "Opening Balance (USD)",
                "balance type",
            ],
            vec![text_row(2, &["Cash", "Asset", "Current Asset", "10", "debit"])],
        );
        let report = validate(&sheet);
        assert!(report.errors.is_empty());
        assert_eq!(report.valid_rows, 1);
    }

    #[test]
    fn test_structurally_incomplete_rows_dropped_silently() {
        // Sheet row 3 has an empty group: excluded from data, no error raised.
        let rows = vec![
            text_row(2, &["Cash", "Asset", "Current Asset", "100", "debit"]),
            text_row(3, &["Bank", "Asset", "", "200", "debit"]),
            text_row(4, &["Rent", "Expense", "Operating Expense", "50", "debit"]),
        ];
        let report = validate(&sheet(&full_header(), rows));
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.data.len(), 2);
        assert!(report.errors.is_empty());
        assert_eq!(report.valid_rows, 2);
        assert!(report.is_uploadable());
        assert!(report.data.iter().all(|r| r.cell(0).text() != "Bank"));
    }

    #[test]
    fn test_short_row_dropped() {
        let rows = vec![RawRow {
            source_row: 2,
            cells: vec![Cell::Text("Cash".to_string()), Cell::Text("Asset".to_string())],
        }];
        let report = validate(&sheet(&full_header(), rows));
        assert!(report.data.is_empty());
        assert_eq!(report.total_rows, 1);
        assert_eq!(report.valid_rows, 0);
    }

    #[test]
    fn test_non_numeric_balance_flagged_with_true_row_number() {
        let rows = vec![text_row(2, &["Cash", "Asset", "Current Asset", "N/A", "debit"])];
        let report = validate(&sheet(&full_header(), rows));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].row, 2);
        assert_eq!(report.errors[0].field, "Balance");
        assert_eq!(report.errors[0].message, "Balance must be a valid number");
        assert!(!report.is_uploadable());
    }

    #[test]
    fn test_empty_balance_is_not_an_error() {
        let rows = vec![text_row(2, &["Cash", "Asset", "Current Asset", "", "debit"])];
        let report = validate(&sheet(&full_header(), rows));
        assert!(report.errors.is_empty());
        assert_eq!(report.valid_rows, 1);
    }

    #[test]
    fn test_numeric_cell_balance_is_valid() {
        let rows = vec![RawRow {
            source_row: 2,
            cells: vec![
                Cell::Text("Cash".to_string()),
                Cell::Text("Asset".to_string()),
                Cell::Text("Current Asset".to_string()),
                Cell::Number(1500.0),
                Cell::Text("debit".to_string()),
            ],
        }];
        let report = validate(&sheet(&full_header(), rows));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_whitespace_name_passes_filter_but_fails_field_rule() {
        let rows = vec![text_row(2, &["   ", "Asset", "Current Asset", "", ""])];
        let report = validate(&sheet(&full_header(), rows));
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "Account Name");
        assert_eq!(report.errors[0].message, "Account name is required");
        assert_eq!(report.valid_rows, 0);
    }

    #[test]
    fn test_error_rows_point_at_sheet_lines_after_filtering() {
        // Sheet row 2 is structurally dropped; the bad balance on sheet row 3
        // must still be reported as row 3, not renumbered.
        let rows = vec![
            text_row(2, &["", "Asset", "Current Asset", "10", "debit"]),
            text_row(3, &["Cash", "Asset", "Current Asset", "oops", "debit"]),
        ];
        let report = validate(&sheet(&full_header(), rows));
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].row, 3);
    }

    #[test]
    fn test_valid_rows_arithmetic_holds() {
        let rows = vec![
            text_row(2, &["Cash", "Asset", "Current Asset", "bad", "debit"]),
            text_row(3, &["  ", "  ", "  ", "also bad", ""]),
            text_row(4, &["Rent", "Expense", "Operating Expense", "", ""]),
        ];
        let report = validate(&sheet(&full_header(), rows));
        // Row 3 produces four errors (three required fields plus balance),
        // row 2 one; 3 data rows - 5 errors = -2. Unclamped by contract.
        assert_eq!(report.data.len(), 3);
        assert_eq!(report.errors.len(), 5);
        assert_eq!(
            report.valid_rows,
            report.data.len() as i64 - report.errors.len() as i64
        );
        assert_eq!(report.valid_rows, -2);
        assert!(!report.is_uploadable());
    }

    #[test]
    fn test_fully_populated_sheet_is_uploadable() {
        let rows = vec![
            text_row(2, &["Cash in Hand", "Asset", "Current Asset", "5000", "debit"]),
            text_row(3, &["Bank Account", "Asset", "Current Asset", "25000", "debit"]),
            text_row(4, &["Accounts Payable", "Liability", "Current Liability", "8200", "credit"]),
            text_row(5, &["Sales Revenue", "Income", "Operating Revenue", "0", "credit"]),
            text_row(6, &["Office Rent", "Expense", "Operating Expense", "0", "debit"]),
            text_row(7, &["Accounts Receivable", "Asset", "Current Asset", "12500", "debit"]),
        ];
        let report = validate(&sheet(&full_header(), rows));
        assert_eq!(report.total_rows, 6);
        assert_eq!(report.valid_rows, 6);
        assert!(report.errors.is_empty());
        assert!(report.is_uploadable());
    }

    #[test]
    fn test_empty_sheet_is_not_uploadable() {
        let report = validate(&sheet(&full_header(), Vec::new()));
        assert!(report.errors.is_empty());
        assert_eq!(report.valid_rows, 0);
        assert!(!report.is_uploadable());
    }
}
