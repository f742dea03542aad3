use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {0} (expected .xlsx or .xls)")]
    UnsupportedFileType(String),

    #[error("Could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Could not write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Upload rejected: {0}")]
    Rejected(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LedgerupError>;
