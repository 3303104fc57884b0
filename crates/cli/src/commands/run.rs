use anyhow::{Context, Result};
use bactalign_engine::driver::{run_optimization_with, OptimizerConfig, RunResult};
use bactalign_engine::fasta;
use bactalign_engine::scoring::Blosum62;
use bactalign_engine::Sequence;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;

use crate::args::RunArgs;
use crate::defaults;
use crate::printing::{print_parameters, print_sequences, print_summary};
use crate::report::{self, RunRecord};

pub fn run_alignment(args: &RunArgs) -> Result<()> {
    println!("🧬 Bactalign - Multiple Sequence Alignment");
    println!("============================================");

    let config = load_config(args)?;

    let records = fasta::parse_fasta(&args.input)
        .with_context(|| format!("Failed to read sequences from {}", args.input.display()))?;
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
    let sequences: Vec<Sequence> = records.iter().map(|r| r.sequence.ungapped()).collect();

    print_sequences(&records);
    print_parameters(&config, args.runs);

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    let scorer = match args.gap_score {
        Some(score) => Blosum62::with_gap_score(score),
        None => Blosum62::new(),
    };

    let pb = if args.progress {
        let pb = ProgressBar::new((args.runs * config.iterations) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .context("Invalid progress template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut summary = Vec::with_capacity(args.runs);
    for run in 1..=args.runs {
        let run_config = OptimizerConfig {
            seed: config.seed.map(|seed| seed.wrapping_add(run as u64)),
            ..config.clone()
        };
        if let Some(pb) = &pb {
            pb.set_message(format!("run {run}/{}", args.runs));
        }

        let result = run_optimization_with(&run_config, &sequences, scorer, run, |_, _| {
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        })
        .with_context(|| format!("Run {run} failed"))?;

        if result.fitness_fallback && pb.is_none() {
            println!("⚠️  Run {run}: invalid fitness, reporting substitution score");
        }

        write_run_alignment(args, &names, &result)?;
        summary.push(RunRecord::from(&result));
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let summary_path = args.output_dir.join(defaults::SUMMARY_FILE);
    report::write_csv(&summary_path, &summary)?;
    let statistics_path = args.output_dir.join(defaults::STATISTICS_FILE);
    report::write_csv(&statistics_path, &report::statistics(&summary))?;

    let config_path = args.output_dir.join(defaults::CONFIG_FILE);
    fs::write(&config_path, config.to_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    print_summary(&summary);

    println!("\n✓ {} runs complete!", args.runs);
    println!("  Results written to {}", args.output_dir.display());

    Ok(())
}

/// Configuration file (or defaults) with command-line overrides applied.
pub fn load_config(args: &RunArgs) -> Result<OptimizerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            OptimizerConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => OptimizerConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(size) = args.population_size {
        config.population_size = size;
    }
    if let Some(tumble) = args.tumble {
        config.iteration.tumble_count = tumble;
    }
    if args.no_profile {
        config.iteration.use_profile_bias = false;
    }

    config.validate().context("Invalid optimizer configuration")?;
    if args.runs == 0 {
        anyhow::bail!("--runs must be at least 1");
    }
    Ok(config)
}

fn write_run_alignment(args: &RunArgs, names: &[String], result: &RunResult) -> Result<()> {
    let path = args.output_dir.join(defaults::alignment_file(result.run));
    fasta::write_alignment_file(&path, names, &result.alignment)
        .with_context(|| format!("Failed to write {}", path.display()))
}
