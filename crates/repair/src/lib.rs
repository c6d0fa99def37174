//! # Readtrace Repair
//!
//! Raw-log repair for reading-experiment event tables.
//!
//! The recording client leaves two defects in its logs: metadata columns are
//! stamped only on the first row of a trial block, and click coordinates are
//! recorded box-relative when the client meant page-absolute. Repair is a
//! two-stage pipeline over a string-typed [`EventTable`]:
//!
//! ```text
//! Raw log table
//!     │
//!     ├──> Imputer
//!     │      ├─> score quiz rows into a `response` column
//!     │      ├─> forward-fill identifiers, backward-fill responses
//!     │      └─> drop pre-trial rows, coerce integers, fill sentinels
//!     │
//!     └──> Corrector (per participant table)
//!            ├─> classify rows against a snapshot (negative / onlyWordFix /
//!            │   combined / normal / blank)
//!            ├─> per-category coordinate transforms
//!            ├─> reverse traversal borrowing the nearest later bounding box
//!            └─> fixed off-page anchor for clicks still unresolved
//! ```
//!
//! Both stages are pure: they return a new table and never touch their input.
//! All layout thresholds live in [`PageGeometry`] so a different rendering
//! layout can override them.
//!
//! [`EventTable`]: readtrace_table::EventTable

mod classify;
mod config;
mod corrector;
mod error;
mod imputer;

pub use classify::{classify, RowClass, WordBox};
pub use config::{PageGeometry, RepairConfig};
pub use corrector::{correct, needs_correction};
pub use error::{RepairError, Result};
pub use imputer::{impute, MISSING_INDEX};
