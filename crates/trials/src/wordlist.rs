use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// One item of the experiment's stimulus specification
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    #[serde(rename = "ItemId", deserialize_with = "int_lenient")]
    pub item_id: i64,

    #[serde(rename = "Experiment", deserialize_with = "int_lenient")]
    pub experiment: i64,

    #[serde(rename = "Condition", deserialize_with = "int_lenient")]
    pub condition: i64,

    /// Page texts; a page is newline-separated lines of
    /// whitespace-separated words
    #[serde(rename = "Pages")]
    pub pages: Vec<String>,
}

/// Items specifications store identifiers as numbers or numeric strings
/// depending on the authoring tool; accept both.
fn int_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Int(v) => Ok(v),
        Raw::Text(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}

/// One word of a page's word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRow {
    pub expr_id: i64,
    pub cond_id: i64,
    pub para_nr: i64,
    pub line_nr: usize,
    pub word_nr: usize,
    pub word: String,
}

/// Statistics of one word-list run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordListStats {
    /// Files written, one per (item, page)
    pub files: usize,

    /// Words across all pages
    pub words: usize,
}

/// Word rows of one page, numbered across the whole page.
///
/// `word_nr` runs across line breaks; only `line_nr` restarts per line.
pub fn page_word_rows(item: &ItemSpec, text: &str) -> Vec<WordRow> {
    let mut rows = Vec::new();
    let mut word_nr = 0usize;
    let lines = text
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty());
    for (line_nr, line) in lines.enumerate() {
        for word in line.split_whitespace() {
            rows.push(WordRow {
                expr_id: item.experiment,
                cond_id: item.condition,
                para_nr: item.item_id,
                line_nr,
                word_nr,
                word: word.to_string(),
            });
            word_nr += 1;
        }
    }
    rows
}

/// Generate one tab-separated word list per (item, page) from an items
/// specification file
pub fn generate_word_lists(
    items_path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<WordListStats> {
    let items_path = items_path.as_ref();
    let out_dir = out_dir.as_ref();

    let text = fs::read_to_string(items_path)?;
    let items: Vec<ItemSpec> = serde_json::from_str(&text)?;
    log::info!("Loaded {} items from {}", items.len(), items_path.display());

    fs::create_dir_all(out_dir)?;
    let mut stats = WordListStats::default();
    for item in &items {
        for (page_nr, page_text) in item.pages.iter().enumerate() {
            let rows = page_word_rows(item, page_text);
            let path = out_dir.join(format!(
                "trial_item_{}_page_{}.tsv",
                item.item_id, page_nr
            ));
            let mut writer = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .from_path(path)?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush().map_err(csv::Error::from)?;
            stats.files += 1;
            stats.words += rows.len();
        }
    }

    log::info!(
        "Wrote {} trial files ({} words) to {}",
        stats.files,
        stats.words,
        out_dir.display()
    );
    Ok(stats)
}
