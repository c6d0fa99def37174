use anyhow::{Context, Result};
use clap::Args;
use readtrace_divide::LogDivider;
use std::path::PathBuf;

#[derive(Args)]
pub struct CorrectArgs {
    /// Directory of divided reader_{id}.csv files
    #[arg(long)]
    pub dir: PathBuf,

    /// TOML file overriding the page geometry
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: CorrectArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    // The raw-log path is unused by the correction pass.
    let divider = LogDivider::new(&args.dir, &args.dir).with_config(config);

    let stats = divider
        .correct_divided()
        .with_context(|| format!("Failed to correct {}", args.dir.display()))?;
    println!(
        "Corrected {} of {} files ({} unchanged, {} failed)",
        stats.corrected,
        stats.files,
        stats.unchanged,
        stats.errors.len()
    );
    anyhow::ensure!(
        stats.errors.is_empty(),
        "{} participant file(s) failed to correct",
        stats.errors.len()
    );
    Ok(())
}
