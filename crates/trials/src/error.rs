use thiserror::Error;

/// Result type for trial-file generation
pub type Result<T> = std::result::Result<T, TrialsError>;

/// Errors that can occur while generating trial files
#[derive(Error, Debug)]
pub enum TrialsError {
    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] readtrace_table::TableError),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed items specification
    #[error("Invalid items specification: {0}")]
    InvalidItems(#[from] serde_json::Error),

    /// CSV write error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
