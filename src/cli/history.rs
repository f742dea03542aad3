use comfy_table::Table;

use crate::error::Result;
use crate::fmt::plural;
use crate::history::load_history;
use crate::settings::get_data_dir;

pub fn run() -> Result<()> {
    let records = load_history(&get_data_dir());
    if records.is_empty() {
        println!("No uploads yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Uploaded", "File", "Accounts", "Created", "Updated"]);
    for record in &records {
        table.add_row(vec![
            record.uploaded_at.clone(),
            record.filename.clone(),
            record.accounts.to_string(),
            record.created.to_string(),
            record.updated.to_string(),
        ]);
    }
    println!("{}\n{table}", plural(records.len(), "upload"));
    Ok(())
}
