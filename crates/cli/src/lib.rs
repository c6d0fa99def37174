//! # Readtrace CLI
//!
//! Command-line frontend over the readtrace crates: divide a raw log into
//! per-participant files, correct their click coordinates, split corrected
//! data by page, generate stimulus word lists, and score comprehension
//! questions.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod command;

use command::{correct, divide, pages, questions, trials};

#[derive(Parser)]
#[command(name = "readtrace")]
#[command(about = "Repair and post-process reading-experiment logs", long_about = None)]
#[command(version)]
struct Cli {
    /// Only warnings and errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impute sparse metadata and split a raw log into per-participant files
    Divide(divide::DivideArgs),

    /// Correct click coordinates of an already-divided directory
    Correct(correct::CorrectArgs),

    /// Split a corrected participant file into per-item/per-page files
    Pages(pages::PagesArgs),

    /// Generate per-page word lists from an items specification
    Trials(trials::TrialsArgs),

    /// Extract and score comprehension-question answers
    Questions(questions::QuestionsArgs),
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Divide(args) => divide::run(args),
        Commands::Correct(args) => correct::run(args),
        Commands::Pages(args) => pages::run(args),
        Commands::Trials(args) => trials::run(args),
        Commands::Questions(args) => questions::run(args),
    }
}
