use std::path::Path;

use colored::Colorize;
use comfy_table::Table;

use crate::cli::validate::{build_report, print_report};
use crate::error::{LedgerupError, Result};
use crate::fmt::{money, plural};
use crate::history::{compute_checksum, is_duplicate, record_upload, UploadRecord};
use crate::models::{AccountSubmission, UploadOptions};
use crate::settings::{get_data_dir, load_settings};
use crate::submit::{map_rows, ApiClient};

pub fn run(
    file: &str,
    create_hierarchy: bool,
    overwrite: bool,
    dry_run: bool,
    force: bool,
    api_url: Option<&str>,
) -> Result<()> {
    let settings = load_settings();
    let path = Path::new(file);
    let data_dir = get_data_dir();

    let checksum = compute_checksum(path)?;
    if !force && is_duplicate(&data_dir, &checksum) {
        println!("This file has already been uploaded (duplicate checksum). Use --force to resend.");
        return Ok(());
    }

    let report = build_report(path)?;
    print_report(&report);
    if !report.is_uploadable() {
        return Err(LedgerupError::Other(
            "workbook is not ready to upload".to_string(),
        ));
    }

    let accounts = map_rows(&report.data);
    let options = UploadOptions {
        create_hierarchy: create_hierarchy || settings.create_hierarchy,
        overwrite_existing: overwrite || settings.overwrite_existing,
    };

    if dry_run {
        print_accounts(&accounts);
        println!("Dry run: nothing sent.");
        return Ok(());
    }

    let base_url = match api_url {
        Some(url) => url.to_string(),
        None if !settings.api_url.is_empty() => settings.api_url.clone(),
        None => {
            return Err(LedgerupError::Settings(
                "no API URL configured; run `ledgerup init --api-url <url>` or pass --api-url"
                    .to_string(),
            ))
        }
    };

    let client = ApiClient::new(&base_url, settings.token())?;
    let counts = match client.upload(&accounts, &options) {
        Ok(counts) => counts,
        Err(LedgerupError::Http(e)) => {
            println!("Upload failed. Please try again.");
            return Err(LedgerupError::Http(e));
        }
        Err(e) => return Err(e),
    };

    println!(
        "{}",
        format!(
            "Uploaded {}: {} created, {} updated",
            plural(accounts.len(), "account"),
            counts.created,
            counts.updated
        )
        .green()
    );
    if !counts.errors.is_empty() {
        println!(
            "{}",
            format!("Server reported {}:", plural(counts.errors.len(), "problem")).yellow()
        );
        for message in counts.errors.iter().take(5) {
            println!("  - {message}");
        }
    }

    record_upload(
        &data_dir,
        UploadRecord {
            filename: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_string(),
            checksum,
            uploaded_at: chrono::Local::now().to_rfc3339(),
            accounts: accounts.len(),
            created: counts.created,
            updated: counts.updated,
        },
    )?;

    Ok(())
}

fn print_accounts(accounts: &[AccountSubmission]) {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Head", "Group", "Balance", "Type"]);
    for account in accounts {
        table.add_row(vec![
            account.name.clone(),
            account.account_type.clone(),
            account.account_group.clone(),
            money(account.balance),
            account.balance_type.clone(),
        ]);
    }
    println!("{table}");
}
