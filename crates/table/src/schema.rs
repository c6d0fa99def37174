//! Column names of the raw event log.
//!
//! The recording client stamps identifier columns only on the first row of a
//! trial block; the quiz columns appear only on the answer row that closes a
//! trial. All other columns are carried through untouched.

/// Trial item identifier, stamped once per trial block
pub const ITEM_ID: &str = "ItemId";

/// Experiment identifier, stamped once per trial block
pub const EXPERIMENT: &str = "Experiment";

/// Condition identifier, stamped once per trial block
pub const CONDITION: &str = "Condition";

/// Per-word/event ordinal, absent on non-word events
pub const INDEX: &str = "Index";

/// Recorded cursor x position (px), absent or sentinel on some events
pub const MOUSE_X: &str = "mousePositionX";

/// Recorded cursor y position (px)
pub const MOUSE_Y: &str = "mousePositionY";

/// Bounding box of the word under/near the cursor at event time
pub const WORD_LEFT: &str = "wordPositionLeft";
pub const WORD_TOP: &str = "wordPositionTop";
pub const WORD_RIGHT: &str = "wordPositionRight";
pub const WORD_BOTTOM: &str = "wordPositionBottom";

/// Primary participant identifier
pub const SUBMISSION_ID: &str = "submission_id";

/// Fallback participant identifier, stamped once per participant
pub const SUBJECT_ID: &str = "SubjectId";

/// Secondary participant identifier used by some recruitment platforms
pub const PROLIFIC_PID: &str = "prolific_pid";

/// Comma-joined quiz correctness flags, computed by the imputer
pub const RESPONSE: &str = "response";

/// Page ordinal within an item
pub const PAGE_NUMBER: &str = "PageNumber";

/// The word associated with an event
pub const WORD: &str = "Word";

/// Number of quiz question slots recorded per trial
pub const QUIZ_SLOTS: usize = 6;

/// Name of the i-th quiz question column
pub fn question(i: usize) -> String {
    format!("question_{i}")
}

/// Name of the i-th given-answer column
pub fn answer(i: usize) -> String {
    format!("answer_{i}")
}

/// Name of the i-th expected-answer column
pub fn correct_answer(i: usize) -> String {
    format!("correct_answer_{i}")
}
