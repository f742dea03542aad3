use std::path::PathBuf;

use crate::error::Result;
use crate::fmt::plural;
use crate::template::{write_sample, DEFAULT_FILENAME, SAMPLE_ACCOUNTS};

pub fn run(output: Option<&str>) -> Result<()> {
    let path = PathBuf::from(output.unwrap_or(DEFAULT_FILENAME));
    write_sample(&path)?;
    println!(
        "Wrote {} ({})",
        path.display(),
        plural(SAMPLE_ACCOUNTS.len(), "example account")
    );
    Ok(())
}
