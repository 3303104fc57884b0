use bactalign_engine::driver::OptimizerConfig;
use bactalign_engine::fasta::FastaRecord;

use crate::report::RunRecord;

pub fn print_sequences(records: &[FastaRecord]) {
    println!("\n🧬 Input Sequences: {}", records.len());
    for (i, record) in records.iter().enumerate() {
        println!(
            "  • {}: {} ({} residues)",
            i + 1,
            record.name,
            record.sequence.len()
        );
    }
}

pub fn print_parameters(config: &OptimizerConfig, runs: usize) {
    let iteration = config.iteration_config();
    println!("\n📋 Optimizer Configuration");
    println!("  • Runs: {runs} [-r, --runs]");
    println!(
        "  • Population Size: {} [-n, --population-size]",
        config.population_size
    );
    println!("  • Iterations: {} [-g, --iterations]", config.iterations);
    println!("  • Gap Insertions: {} [--tumble]", iteration.tumble_count);
    println!(
        "  • Conservation Profile: {} [--no-profile]",
        if iteration.use_profile_bias {
            "Enabled"
        } else {
            "Disabled"
        }
    );
    match config.seed {
        Some(seed) => println!("  • Random Seed: {seed} [--seed]"),
        None => println!("  • Random Seed: Random [--seed]"),
    }

    println!("\n🦠 Cell Interaction");
    println!(
        "  • Attraction: depth {:.3}, width {:.3e}",
        iteration.attraction_distance, iteration.attraction_width
    );
    println!(
        "  • Repulsion: height {:.3}, width {:.3e}",
        iteration.repulsion_distance, iteration.repulsion_width
    );
    println!();
}

pub fn print_summary(records: &[RunRecord]) {
    println!("\n📊 Run Summary");
    println!(
        "  {:>4}  {:>5}  {:>14}  {:>14}  {:>12}  {:>6}  {:>9}",
        "run", "best", "fitness", "substitution", "interaction", "nfe", "time (s)"
    );
    for r in records {
        println!(
            "  {:>4}  {:>5}  {:>14.4}  {:>14.4}  {:>12.4e}  {:>6}  {:>9.3}",
            r.run,
            r.best_index,
            r.fitness,
            r.substitution_score,
            r.interaction_score,
            r.evaluations,
            r.elapsed_seconds
        );
    }
}
