use std::path::Path;

use colored::Colorize;
use comfy_table::Table;

use crate::error::{LedgerupError, Result};
use crate::fmt::plural;
use crate::models::ValidationReport;
use crate::validator::validate;
use crate::workbook::read_rows;

const MAX_DISPLAYED_ERRORS: usize = 5;

pub fn run(file: &str, report_path: Option<&str>) -> Result<()> {
    let report = build_report(Path::new(file))?;
    print_report(&report);

    if let Some(path) = report_path {
        write_error_csv(&report, path)?;
        println!("Wrote {path}");
    }

    if !report.errors.is_empty() {
        return Err(LedgerupError::Other(plural(
            report.errors.len(),
            "validation error",
        )));
    }
    Ok(())
}

/// Parse and validate. Unreadable workbook bytes become a single file-level
/// error so the rendering path stays uniform; a rejected extension stays a
/// hard error, since nothing was parsed at all.
pub fn build_report(path: &Path) -> Result<ValidationReport> {
    match read_rows(path) {
        Ok(sheet) => Ok(validate(&sheet)),
        Err(LedgerupError::Workbook(e)) => Ok(ValidationReport::file_error(e.to_string())),
        Err(e) => Err(e),
    }
}

pub fn print_report(report: &ValidationReport) {
    println!(
        "{} read, {} valid, {}",
        plural(report.total_rows, "row"),
        report.valid_rows,
        plural(report.errors.len(), "error"),
    );

    if report.errors.is_empty() {
        if report.valid_rows > 0 {
            println!("{}", "Ready to upload.".green());
        } else {
            println!("No account rows found.");
        }
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Row", "Field", "Problem"]);
    for err in report.errors.iter().take(MAX_DISPLAYED_ERRORS) {
        table.add_row(vec![
            err.row.to_string(),
            err.field.to_string(),
            err.message.clone(),
        ]);
    }
    println!("{table}");

    let hidden = report.errors.len().saturating_sub(MAX_DISPLAYED_ERRORS);
    if hidden > 0 {
        println!("+{hidden} more");
    }
    println!("{}", "Fix the source file and re-run validate.".red());
}

fn write_error_csv(report: &ValidationReport, path: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["row", "field", "message"])?;
    for err in &report.errors {
        wtr.write_record([
            err.row.to_string(),
            err.field.to_string(),
            err.message.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
