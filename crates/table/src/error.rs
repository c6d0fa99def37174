use thiserror::Error;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur while reading, writing, or addressing a table
#[derive(Error, Debug)]
pub enum TableError {
    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parse or write error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A column required by the operation is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl TableError {
    /// Create a missing-column error
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }
}
