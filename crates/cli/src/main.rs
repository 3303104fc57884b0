mod args;
mod commands;
pub mod defaults;
mod printing;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::{RunArgs, ScoreArgs};
use commands::{config, run, score};

/// Bactalign: multiple sequence alignment by bacterial foraging optimization
///
/// A population of candidate alignments is improved by random gap insertion,
/// BLOSUM62 scoring, cell-to-cell signaling and elitist replacement.
#[derive(Parser, Debug)]
#[command(name = "bactalign")]
#[command(author, version, about = "Aligns protein sequences with a bacterial foraging optimizer", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run independent optimizations over a FASTA file.
    ///
    /// Writes the best alignment of every run plus summary and statistics
    /// reports to the output directory.
    Run(Box<RunArgs>),

    /// Score an existing alignment with BLOSUM62.
    Score(ScoreArgs),

    /// Write the default optimizer configuration as JSON.
    Config {
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let log_level =
        std::env::var(defaults::LOG_ENV).unwrap_or_else(|_| defaults::LOG_LEVEL.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => {
            run::run_alignment(&args)?;
        }
        Commands::Score(args) => {
            score::score_alignment(&args)?;
        }
        Commands::Config { output } => {
            config::write_default_config(output.as_deref())?;
        }
    }

    Ok(())
}
