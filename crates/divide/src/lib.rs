//! # Readtrace Divide
//!
//! Batch orchestration of the log repair pipeline.
//!
//! ```text
//! raw log CSV
//!     │
//!     ├──> impute metadata (readtrace-repair)
//!     │
//!     ├──> split by participant ──> reader_{id}.csv        (divided dir)
//!     │
//!     └──> correct each file   ──> reader_{id}.csv         (corrected_ dir)
//! ```
//!
//! Participants are independent units of work: a file that fails to correct
//! is logged and counted, and the rest of the batch continues.

mod divider;
mod error;
mod participant;

pub use divider::{corrected_dir_for, CorrectStats, DivideStats, LogDivider};
pub use error::{DivideError, Result};
pub use participant::{normalize_participant_column, split_by_participant};
