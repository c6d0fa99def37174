use anyhow::{Context, Result};
use clap::Args;
use readtrace_questions::{process_file, process_folder};
use std::path::PathBuf;

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct QuestionsInput {
    /// One raw log CSV
    #[arg(long)]
    pub in_file: Option<PathBuf>,

    /// Folder of raw log CSVs, combined into one report
    #[arg(long)]
    pub in_folder: Option<PathBuf>,
}

#[derive(Args)]
pub struct QuestionsArgs {
    #[command(flatten)]
    pub input: QuestionsInput,

    /// Directory receiving question_analysis.csv and item_statistics.csv
    #[arg(long, default_value = "question_analysis")]
    pub out_dir: PathBuf,
}

pub fn run(args: QuestionsArgs) -> Result<()> {
    let stats = match (&args.input.in_file, &args.input.in_folder) {
        (Some(file), _) => process_file(file, &args.out_dir)
            .with_context(|| format!("Failed to analyze {}", file.display()))?,
        (_, Some(folder)) => process_folder(folder, &args.out_dir)
            .with_context(|| format!("Failed to analyze {}", folder.display()))?,
        _ => unreachable!("clap enforces exactly one input"),
    };
    println!(
        "Extracted {} answer records from {} file(s) ({} skipped)",
        stats.records,
        stats.files,
        stats.errors.len()
    );
    Ok(())
}
