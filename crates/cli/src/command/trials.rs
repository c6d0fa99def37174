use anyhow::{Context, Result};
use clap::Args;
use readtrace_trials::generate_word_lists;
use std::path::PathBuf;

#[derive(Args)]
pub struct TrialsArgs {
    /// Items specification JSON
    #[arg(long)]
    pub items: PathBuf,

    /// Directory receiving one trial_item_{i}_page_{p}.tsv per page
    #[arg(long)]
    pub out_dir: PathBuf,
}

pub fn run(args: TrialsArgs) -> Result<()> {
    let stats = generate_word_lists(&args.items, &args.out_dir)
        .with_context(|| format!("Failed to process {}", args.items.display()))?;
    println!(
        "Wrote {} trial files ({} words) to {}",
        stats.files,
        stats.words,
        args.out_dir.display()
    );
    Ok(())
}
