pub mod history;
pub mod init;
pub mod sample;
pub mod status;
pub mod upload;
pub mod validate;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ledgerup",
    about = "Validate and bulk-upload chart-of-accounts spreadsheets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up ledgerup: backend URL, token, and data directory.
    Init {
        /// Backend base URL, e.g. https://books.example.com
        #[arg(long = "api-url")]
        api_url: Option<String>,
        /// Bearer token for authenticated uploads
        #[arg(long)]
        token: Option<String>,
        /// Directory for upload history (default: platform data dir)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Validate a chart-of-accounts workbook without uploading.
    Validate {
        /// Path to an .xlsx or .xls file
        file: String,
        /// Write the full error list to a CSV file
        #[arg(long)]
        report: Option<String>,
    },
    /// Validate a workbook and upload it to the backend.
    Upload {
        /// Path to an .xlsx or .xls file
        file: String,
        /// Create missing heads/groups server-side
        #[arg(long = "create-hierarchy")]
        create_hierarchy: bool,
        /// Overwrite accounts that already exist
        #[arg(long)]
        overwrite: bool,
        /// Map and display the request without sending it
        #[arg(long = "dry-run")]
        dry_run: bool,
        /// Upload even if this exact file was uploaded before
        #[arg(long)]
        force: bool,
        /// Override the configured backend URL
        #[arg(long = "api-url")]
        api_url: Option<String>,
    },
    /// Write a sample workbook with the expected columns.
    Sample {
        /// Output path (default: chart-of-accounts-sample.xlsx)
        output: Option<String>,
    },
    /// List past uploads.
    History,
    /// Show current configuration and upload statistics.
    Status,
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
