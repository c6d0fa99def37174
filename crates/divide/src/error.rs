use thiserror::Error;

/// Result type for divide operations
pub type Result<T> = std::result::Result<T, DivideError>;

/// Errors that can occur while dividing or correcting a log
#[derive(Error, Debug)]
pub enum DivideError {
    /// Neither participant identifier column exists; grouping is impossible
    #[error("No participant identifier column ('submission_id' or 'SubjectId') in input")]
    MissingParticipantColumn,

    /// The divided directory has no parent to place the corrected copy next to
    #[error("Cannot derive corrected directory for: {0}")]
    InvalidOutputDir(String),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] readtrace_table::TableError),

    /// Repair error
    #[error("Repair error: {0}")]
    Repair(#[from] readtrace_repair::RepairError),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid glob pattern
    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),
}
