use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input FASTA file with the unaligned sequences
    #[arg(short, long)]
    pub input: PathBuf,

    /// Optimizer configuration (JSON)
    ///
    /// Command-line options below override values from this file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of independent runs
    #[arg(short = 'r', long, default_value_t = defaults::RUNS)]
    pub runs: usize,

    /// Directory for alignments and reports
    #[arg(short, long, default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Base random seed (run k uses seed + k)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Iterations per run
    #[arg(short = 'g', long)]
    pub iterations: Option<usize>,

    /// Number of candidate alignments
    #[arg(short = 'n', long)]
    pub population_size: Option<usize>,

    /// Gap insertions per candidate per iteration
    #[arg(long)]
    pub tumble: Option<usize>,

    /// Insert gaps uniformly instead of following the conservation profile
    #[arg(long)]
    pub no_profile: bool,

    /// Score gap pairs with this value instead of the lookup penalty
    #[arg(long)]
    pub gap_score: Option<f64>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Aligned FASTA file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Score gap pairs with this value instead of the lookup penalty
    #[arg(long)]
    pub gap_score: Option<f64>,
}
