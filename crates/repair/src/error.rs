use thiserror::Error;

/// Result type for repair operations
pub type Result<T> = std::result::Result<T, RepairError>;

/// Errors that can occur during log repair
#[derive(Error, Debug)]
pub enum RepairError {
    /// A column required by the repair stage is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A cell that must coerce to an integer holds non-numeric text
    #[error("Invalid numeric value in column {column}, row {row}: '{value}'")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// A cell that must coerce to an integer is empty after filling
    #[error("Missing value in column {column}, row {row}")]
    MissingValue { column: String, row: usize },

    /// Invalid geometry configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RepairError {
    /// Create a missing-column error
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
