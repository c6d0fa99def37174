//! # Readtrace Trials
//!
//! Projections of clean trial data into per-page artifacts.
//!
//! Two independent generators live here:
//!
//! - [`split_by_item_and_page`] takes a corrected per-participant table and
//!   writes one CSV per (item, page) group, the unit downstream reading
//!   measures are computed over.
//! - [`generate_word_lists`] takes the items specification (JSON) the
//!   experiment was built from and writes one tab-separated word list per
//!   (item, page), with words numbered across the whole page.

mod error;
mod item_page;
mod wordlist;

pub use error::{Result, TrialsError};
pub use item_page::split_by_item_and_page;
pub use wordlist::{generate_word_lists, page_word_rows, ItemSpec, WordListStats, WordRow};
