use anyhow::{Context, Result};
use clap::Args;
use readtrace_divide::LogDivider;
use std::path::PathBuf;

#[derive(Args)]
pub struct DivideArgs {
    /// Raw log CSV to divide
    #[arg(long, short)]
    pub input: PathBuf,

    /// Directory receiving one reader_{id}.csv per participant
    #[arg(long)]
    pub out_dir: PathBuf,

    /// TOML file overriding the page geometry
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop after dividing; skip the correction pass
    #[arg(long)]
    pub skip_correct: bool,
}

pub fn run(args: DivideArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let divider = LogDivider::new(&args.input, &args.out_dir).with_config(config);

    let stats = divider
        .divide()
        .with_context(|| format!("Failed to divide {}", args.input.display()))?;
    println!(
        "Divided {} rows into {} participant files ({} rows retained)",
        stats.rows_read, stats.files_written, stats.rows_retained
    );

    if args.skip_correct {
        return Ok(());
    }

    let stats = divider
        .correct_divided()
        .context("Correction pass failed")?;
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
