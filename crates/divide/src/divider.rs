use crate::error::{DivideError, Result};
use crate::participant::{normalize_participant_column, split_by_participant};
use readtrace_repair::{correct, impute, needs_correction, RepairConfig};
use readtrace_table::{read_csv, schema, write_csv_bom};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Statistics of one divide run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DivideStats {
    /// Rows in the raw log
    pub rows_read: usize,

    /// Rows surviving imputation
    pub rows_retained: usize,

    /// Distinct participants found
    pub participants: usize,

    /// Per-participant files written
    pub files_written: usize,
}

/// Statistics of one correction run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrectStats {
    /// Files examined
    pub files: usize,

    /// Files that met the correction precondition
    pub corrected: usize,

    /// Files passed through unchanged
    pub unchanged: usize,

    /// Errors encountered, one message per failed file
    pub errors: Vec<String>,
}

/// Splits one raw log into per-participant files and corrects them.
///
/// The two passes are separate so an already-divided directory can be
/// re-corrected without re-reading the raw log.
pub struct LogDivider {
    raw_path: PathBuf,
    out_dir: PathBuf,
    config: RepairConfig,
}

impl LogDivider {
    pub fn new(raw_path: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Self {
        Self {
            raw_path: raw_path.as_ref().to_path_buf(),
            out_dir: out_dir.as_ref().to_path_buf(),
            config: RepairConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RepairConfig) -> Self {
        self.config = config;
        self
    }

    /// Impute the raw log and write one `reader_{id}.csv` per participant
    pub fn divide(&self) -> Result<DivideStats> {
        let mut raw = read_csv(&self.raw_path)?;
        let rows_read = raw.len();

        normalize_participant_column(&mut raw)?;
        let repaired = impute(&raw, &self.config.geometry)?;
        let id_col = repaired
            .column(schema::SUBMISSION_ID)
            .ok_or(DivideError::MissingParticipantColumn)?;

        fs::create_dir_all(&self.out_dir)?;
        let groups = split_by_participant(&repaired, id_col);

        let mut stats = DivideStats {
            rows_read,
            rows_retained: repaired.len(),
            participants: groups.len(),
            files_written: 0,
        };
        for (id, group) in &groups {
            let path = self.out_dir.join(format!("reader_{id}.csv"));
            write_csv_bom(group, &path)?;
            stats.files_written += 1;
        }

        log::info!(
            "Divided {} rows into {} participant files in {}",
            stats.rows_retained,
            stats.files_written,
            self.out_dir.display()
        );
        Ok(stats)
    }

    /// Correct every divided file into the sibling `corrected_` directory.
    ///
    /// A file that fails to read or correct is logged and counted; the rest
    /// of the batch continues.
    pub fn correct_divided(&self) -> Result<CorrectStats> {
        let corrected_dir = corrected_dir_for(&self.out_dir)?;
        fs::create_dir_all(&corrected_dir)?;

        let pattern = self.out_dir.join("*.csv");
        let pattern = pattern.to_string_lossy().into_owned();

        let mut stats = CorrectStats::default();
        for entry in glob::glob(&pattern)? {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Unreadable directory entry: {e}");
                    stats.errors.push(e.to_string());
                    continue;
                }
            };
            stats.files += 1;
            match self.correct_file(&path, &corrected_dir) {
                Ok(true) => stats.corrected += 1,
                Ok(false) => stats.unchanged += 1,
                Err(e) => {
                    log::error!("Failed to correct {}: {e}", path.display());
                    stats.errors.push(format!("{}: {e}", path.display()));
                }
            }
        }

        log::info!(
            "Corrected {} of {} files into {} ({} failed)",
            stats.corrected,
            stats.files,
            corrected_dir.display(),
            stats.errors.len()
        );
        Ok(stats)
    }

    fn correct_file(&self, path: &Path, corrected_dir: &Path) -> Result<bool> {
        let table = read_csv(path)?;
        let run = needs_correction(&table);
        if run {
            log::info!("Correcting {}", path.display());
        }
        let corrected = correct(&table, &self.config.geometry)?;

        let file_name = path
            .file_name()
            .ok_or_else(|| DivideError::InvalidOutputDir(path.display().to_string()))?;
        write_csv_bom(&corrected, corrected_dir.join(file_name))?;
        Ok(run)
    }
}

/// Sibling directory holding the corrected copies: the divided directory's
/// name prefixed with `corrected_`
pub fn corrected_dir_for(out_dir: &Path) -> Result<PathBuf> {
    let name = out_dir
        .file_name()
        .ok_or_else(|| DivideError::InvalidOutputDir(out_dir.display().to_string()))?;
    let parent = out_dir.parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.join(format!("corrected_{}", name.to_string_lossy())))
}
