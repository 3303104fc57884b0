//! Complete optimization runs.
//!
//! A run builds an engine from an [`OptimizerConfig`], optionally computes
//! the conservation profile, iterates, and reports the best candidate of the
//! final iteration.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::alignment::Candidate;
use crate::base::Sequence;
use crate::errors::{BuilderError, ConfigError};
use crate::optimizer::{EngineBuilder, IterationConfig, IterationOutcome};
use crate::scoring::SubstitutionScorer;

/// Full configuration of one optimization run.
/// Can be deserialized from a file to reproduce a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Number of candidate alignments
    pub population_size: usize,
    /// Iterations per run
    pub iterations: usize,
    /// Optional RNG seed for reproducibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Per-iteration parameters
    #[serde(flatten)]
    pub iteration: IterationConfig,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 4,
            iterations: 3,
            seed: None,
            iteration: IterationConfig::default(),
        }
    }
}

impl OptimizerConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "iterations",
                value: 0.0,
            });
        }
        self.iteration.validate()
    }

    /// The per-iteration subset.
    pub fn iteration_config(&self) -> &IterationConfig {
        &self.iteration
    }
}

/// Result of one optimization run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Run number (1-based, as assigned by the caller)
    pub run: usize,
    /// Index of the best candidate in the final population
    pub best_index: usize,
    /// Reported fitness (substitution score when the fitness was not finite)
    pub fitness: f64,
    pub substitution_score: f64,
    pub interaction_score: f64,
    /// Cumulative evaluations
    pub evaluations: u64,
    pub elapsed: Duration,
    /// True when `fitness` was replaced by the substitution score
    pub fitness_fallback: bool,
    /// Copy of the best alignment
    pub alignment: Candidate,
}

/// Run a complete optimization.
pub fn run_optimization<S: SubstitutionScorer>(
    config: &OptimizerConfig,
    sequences: &[Sequence],
    scorer: S,
    run: usize,
) -> Result<RunResult, BuilderError> {
    run_optimization_with(config, sequences, scorer, run, |_, _| {})
}

/// Run a complete optimization, calling `on_iteration` with the iteration
/// number and outcome after every iteration.
pub fn run_optimization_with<S, F>(
    config: &OptimizerConfig,
    sequences: &[Sequence],
    scorer: S,
    run: usize,
    mut on_iteration: F,
) -> Result<RunResult, BuilderError>
where
    S: SubstitutionScorer,
    F: FnMut(usize, &IterationOutcome),
{
    config.validate()?;

    let mut engine = EngineBuilder::new()
        .sequences(sequences.to_vec())
        .population_size(config.population_size)
        .conservation_profile(config.iteration.use_profile_bias)
        .maybe_seed(config.seed)
        .build(scorer)?;

    let start = Instant::now();
    let mut last = None;
    for iteration in 1..=config.iterations {
        let outcome = engine.run_iteration(config.iteration_config())?;
        on_iteration(iteration, &outcome);
        last = Some(outcome);
    }
    let elapsed = start.elapsed();

    // validate() guarantees at least one iteration
    let best = last.ok_or(ConfigError::InvalidParameter {
        name: "iterations",
        value: 0.0,
    })?;
    let alignment = engine
        .candidate(best.best_index)
        .cloned()
        .ok_or(ConfigError::EmptyPopulation)?;

    let fitness_fallback = !best.fitness.is_finite();
    let fitness = if fitness_fallback {
        warn!(
            run,
            fitness = best.fitness,
            "invalid fitness, reporting substitution score instead"
        );
        best.substitution_score
    } else {
        best.fitness
    };

    info!(
        run,
        best = best.best_index,
        fitness,
        evaluations = best.cumulative_evaluations,
        elapsed_ms = elapsed.as_millis() as u64,
        "run complete"
    );

    Ok(RunResult {
        run,
        best_index: best.best_index,
        fitness,
        substitution_score: best.substitution_score,
        interaction_score: best.interaction_score,
        evaluations: best.cumulative_evaluations,
        elapsed,
        fitness_fallback,
        alignment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Residue;
    use crate::errors::ScoreError;
    use crate::scoring::Blosum62;

    fn seqs(rows: &[&str]) -> Vec<Sequence> {
        rows.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = OptimizerConfig::default();
        assert_eq!(config.population_size, 4);
        assert_eq!(config.iterations, 3);
        assert_eq!(config.iteration.tumble_count, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_json_flattened() {
        let config =
            OptimizerConfig::from_json(r#"{"population_size": 8, "tumble_count": 1, "seed": 7}"#)
                .unwrap();
        assert_eq!(config.population_size, 8);
        assert_eq!(config.iteration.tumble_count, 1);
        assert_eq!(config.seed, Some(7));

        let json = config.to_json().unwrap();
        assert_eq!(OptimizerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_zero_iterations() {
        let result = OptimizerConfig::from_json(r#"{"iterations": 0}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "iterations", .. })
        ));
    }

    #[test]
    fn test_run_optimization() {
        let config = OptimizerConfig {
            seed: Some(3),
            ..Default::default()
        };
        let inputs = seqs(&["MKVLAT", "MKAT", "MVLAT"]);
        let mut seen = Vec::new();

        let result = run_optimization_with(&config, &inputs, Blosum62::new(), 1, |i, _| seen.push(i))
            .unwrap();

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(result.run, 1);
        assert_eq!(result.evaluations, 12);
        assert!(!result.fitness_fallback);
        assert!(result.alignment.is_rectangular());
        for (row, input) in result.alignment.rows().iter().zip(&inputs) {
            assert_eq!(&row.ungapped(), input);
        }
    }

    struct Exploding;

    impl SubstitutionScorer for Exploding {
        fn score(&self, _a: Residue, _b: Residue) -> Result<f64, ScoreError> {
            Ok(f64::NAN)
        }
    }

    #[test]
    fn test_invalid_fitness_falls_back() {
        let config = OptimizerConfig {
            seed: Some(3),
            ..Default::default()
        };
        let result = run_optimization(&config, &seqs(&["MK", "MK"]), Exploding, 1).unwrap();
        assert!(result.fitness_fallback);
        assert!(result.substitution_score.is_nan());
    }
}
