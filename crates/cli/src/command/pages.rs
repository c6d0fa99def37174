use anyhow::{Context, Result};
use clap::Args;
use readtrace_trials::split_by_item_and_page;
use std::path::PathBuf;

#[derive(Args)]
pub struct PagesArgs {
    /// Corrected participant CSV to split
    #[arg(long, short)]
    pub input: PathBuf,

    /// Directory receiving one item_{i}_page_{p}.csv per group
    #[arg(long)]
    pub out_dir: PathBuf,
}

pub fn run(args: PagesArgs) -> Result<()> {
    let files = split_by_item_and_page(&args.input, &args.out_dir)
        .with_context(|| format!("Failed to split {}", args.input.display()))?;
    println!("Wrote {files} item/page files to {}", args.out_dir.display());
    Ok(())
}
