use anyhow::{Context, Result};
use bactalign_engine::alignment::Candidate;
use bactalign_engine::fasta;
use bactalign_engine::scoring::{evaluate_pair_set, Blosum62, PairSet};
use tracing::warn;

use crate::args::ScoreArgs;

/// Score an existing alignment and print its substitution score.
pub fn score_alignment(args: &ScoreArgs) -> Result<()> {
    let records = fasta::parse_fasta(&args.input)
        .with_context(|| format!("Failed to read alignment from {}", args.input.display()))?;

    let mut alignment = Candidate::new(records.into_iter().map(|r| r.sequence).collect());
    if !alignment.is_rectangular() {
        warn!(
            columns = alignment.max_row_len(),
            "rows differ in length, padding with gaps"
        );
        alignment.pad();
    }

    let scorer = match args.gap_score {
        Some(score) => Blosum62::with_gap_score(score),
        None => Blosum62::new(),
    };
    let pairs = PairSet::from_candidate(&alignment);
    let score = evaluate_pair_set(&scorer, &pairs);

    println!("Sequences: {}", alignment.len());
    println!("Columns: {}", alignment.columns());
    println!("Substitution score: {score}");

    Ok(())
}
