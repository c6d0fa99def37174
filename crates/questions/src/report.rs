use crate::error::{QuestionsError, Result};
use crate::extract::{extract_answers, AnswerRecord};
use crate::stats::item_statistics;
use readtrace_table::read_csv;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Statistics of one question-analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionStats {
    /// Input files examined
    pub files: usize,

    /// Answer records extracted across all files
    pub records: usize,

    /// Errors encountered, one message per skipped file
    pub errors: Vec<String>,
}

/// Analyze one raw log file and write both reports
pub fn process_file(input: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<QuestionStats> {
    let input = input.as_ref();
    let table = read_csv(input)?;
    let records = extract_answers(&table)?;
    write_reports(&records, out_dir)?;
    Ok(QuestionStats {
        files: 1,
        records: records.len(),
        errors: Vec::new(),
    })
}

/// Analyze every CSV in a folder, combining the surviving records.
///
/// A file that fails to read or carries no question data is logged and
/// skipped; the batch only fails when nothing at all could be extracted.
pub fn process_folder(folder: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<QuestionStats> {
    let folder = folder.as_ref();
    let pattern = folder.join("*.csv");
    let pattern = pattern.to_string_lossy().into_owned();

    let mut stats = QuestionStats::default();
    let mut combined: Vec<AnswerRecord> = Vec::new();
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
        let result = read_csv(&path)
            .map_err(QuestionsError::from)
            .and_then(|table| extract_answers(&table));
        match result {
            Ok(records) => combined.extend(records),
            Err(e) => {
                log::error!("Skipping {}: {e}", path.display());
                stats.errors.push(format!("{}: {e}", path.display()));
            }
        }
    }

    if combined.is_empty() {
        return Err(QuestionsError::NoQuestionData);
    }
    stats.records = combined.len();
    write_reports(&combined, out_dir)?;
    Ok(stats)
}

/// Write `question_analysis.csv` and `item_statistics.csv`
pub fn write_reports(records: &[AnswerRecord], out_dir: impl AsRef<Path>) -> Result<()> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let analysis_path = out_dir.join("question_analysis.csv");
    let mut writer = csv::Writer::from_path(&analysis_path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    let stats = item_statistics(records);
    let stats_path = out_dir.join("item_statistics.csv");
    let mut writer = csv::Writer::from_path(&stats_path)?;
    for stat in &stats {
        writer.serialize(stat)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    let total = records.len();
    let correct = records.iter().filter(|r| r.is_correct).count();
    let accuracy = if total > 0 {
        correct as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    log::info!("{total} questions, {correct} correct ({accuracy:.2}% overall)");
    log::info!("Wrote {} and {}", analysis_path.display(), stats_path.display());
    Ok(())
}
