//! # Readtrace Questions
//!
//! Comprehension-question analysis over raw reading logs.
//!
//! ```text
//! raw log CSV (file or folder)
//!     │
//!     ├──> extract_answers: one scored record per answered question
//!     │
//!     ├──> question_analysis.csv   (every answer, with trial score)
//!     │
//!     └──> item_statistics.csv     (per-item accuracy, sorted descending)
//! ```
//!
//! Scoring here is exact string equality on the recorded fields, stricter
//! than the repair pipeline's trimmed comparison: this output feeds manual
//! review rather than automated filtering.

mod error;
mod extract;
mod report;
mod stats;

pub use error::{QuestionsError, Result};
pub use extract::{extract_answers, AnswerRecord};
pub use report::{process_file, process_folder, write_reports, QuestionStats};
pub use stats::{item_statistics, ItemStat};
