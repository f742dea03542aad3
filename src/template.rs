use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::validator::REQUIRED_COLUMNS;

pub const DEFAULT_FILENAME: &str = "chart-of-accounts-sample.xlsx";

/// (name, head, group, balance, balance type)
pub const SAMPLE_ACCOUNTS: &[(&str, &str, &str, f64, &str)] = &[
    ("Cash in Hand", "Asset", "Current Asset", 5_000.0, "debit"),
    ("Bank Account", "Asset", "Current Asset", 25_000.0, "debit"),
    ("Accounts Receivable", "Asset", "Current Asset", 12_500.0, "debit"),
    ("Accounts Payable", "Liability", "Current Liability", 8_200.0, "credit"),
    ("Sales Revenue", "Income", "Operating Revenue", 0.0, "credit"),
    ("Office Rent", "Expense", "Operating Expense", 0.0, "debit"),
];

/// Write the sample workbook: the 5-column header plus one row per example
/// account, ready to round-trip through `validate` untouched.
pub fn write_sample(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, label) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *label)?;
    }
    for (idx, (name, head, group, balance, balance_type)) in SAMPLE_ACCOUNTS.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, *name)?;
        sheet.write_string(row, 1, *head)?;
        sheet.write_string(row, 2, *group)?;
        sheet.write_number(row, 3, *balance)?;
        sheet.write_string(row, 4, *balance_type)?;
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::map_rows;
    use crate::validator::validate;
    use crate::workbook::read_rows;

    #[test]
    fn test_sample_round_trips_clean() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILENAME);
        write_sample(&path).unwrap();

        let sheet = read_rows(&path).unwrap();
        let report = validate(&sheet);
        assert_eq!(report.total_rows, SAMPLE_ACCOUNTS.len());
        assert_eq!(report.valid_rows, SAMPLE_ACCOUNTS.len() as i64);
        assert!(report.errors.is_empty());
        assert!(report.is_uploadable());
    }

    #[test]
    fn test_sample_maps_to_expected_submissions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.xlsx");
        write_sample(&path).unwrap();

        let sheet = read_rows(&path).unwrap();
        let report = validate(&sheet);
        let accounts = map_rows(&report.data);

        assert_eq!(accounts.len(), 6);
        assert_eq!(accounts[0].name, "Cash in Hand");
        assert_eq!(accounts[0].balance, 5_000.0);
        assert_eq!(accounts[3].name, "Accounts Payable");
        assert_eq!(accounts[3].balance_type, "credit");
        assert_eq!(accounts[4].balance, 0.0);
    }
}
