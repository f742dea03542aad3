use crate::error::Result;
use crate::history::load_history;
use crate::settings::{get_data_dir, load_settings, settings_file_exists};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = get_data_dir();

    println!(
        "API URL:   {}",
        if settings.api_url.is_empty() {
            "(not set)"
        } else {
            &settings.api_url
        }
    );
    println!(
        "Token:     {}",
        if settings.token().is_some() {
            "(set)"
        } else {
            "(not set)"
        }
    );
    println!("Data dir:  {}", data_dir.display());
    println!(
        "Defaults:  create-hierarchy={}, overwrite={}",
        settings.create_hierarchy, settings.overwrite_existing
    );

    let records = load_history(&data_dir);
    println!();
    println!("Uploads:   {}", records.len());
    if let Some(last) = records.last() {
        println!(
            "Last:      {} ({} accounts, {})",
            last.filename, last.accounts, last.uploaded_at
        );
    }

    if !settings_file_exists() {
        println!();
        println!("No settings file yet. Run `ledgerup init --api-url <url>` to set up.");
    }
    Ok(())
}
