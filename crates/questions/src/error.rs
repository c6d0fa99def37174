use thiserror::Error;

/// Result type for question analysis
pub type Result<T> = std::result::Result<T, QuestionsError>;

/// Errors that can occur during question analysis
#[derive(Error, Debug)]
pub enum QuestionsError {
    /// The log carries no question columns at all
    #[error("No question columns found in: {0}")]
    NoQuestionColumns(String),

    /// No file in the batch produced any answer records
    #[error("No question data found in any input file")]
    NoQuestionData,

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] readtrace_table::TableError),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV write error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Invalid glob pattern
    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),
}
