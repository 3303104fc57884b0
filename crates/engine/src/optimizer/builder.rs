//! Builder pattern for creating engines.
//!
//! Provides a fluent API for configuring an [`Engine`] with validation of
//! the inputs and of the substitution scorer.

use crate::base::{Residue, Sequence};
pub use crate::errors::BuilderError;
use crate::errors::ConfigError;
use crate::optimizer::Engine;
use crate::scoring::{verify_symmetry, SubstitutionScorer};

/// Builder for constructing `Engine` instances with a fluent API.
///
/// # Examples
///
/// ```
/// use bactalign_engine::optimizer::{EngineBuilder, IterationConfig};
/// use bactalign_engine::scoring::Blosum62;
///
/// let mut engine = EngineBuilder::new()
///     .sequences(vec!["MKVLAT".parse().unwrap(), "MKAT".parse().unwrap()])
///     .population_size(4)
///     .conservation_profile(true)
///     .seed(42)
///     .build(Blosum62::new())
///     .unwrap();
///
/// let outcome = engine.run_iteration(&IterationConfig::default()).unwrap();
/// assert!(outcome.best_index < 4);
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    sequences: Option<Vec<Sequence>>,
    population_size: Option<usize>,
    conservation_profile: bool, // Default: false
    verify_scorer: bool,        // Default: true
    seed: Option<u64>,          // Default: None (random)
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a new engine builder with default values.
    pub fn new() -> Self {
        Self {
            sequences: None,
            population_size: None,
            conservation_profile: false,
            verify_scorer: true,
            seed: None,
        }
    }

    /// Set the unaligned input sequences (required).
    pub fn sequences(mut self, sequences: Vec<Sequence>) -> Self {
        self.sequences = Some(sequences);
        self
    }

    /// Set the population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Compute the conservation profile of the input at build time.
    pub fn conservation_profile(mut self, enabled: bool) -> Self {
        self.conservation_profile = enabled;
        self
    }

    /// Check scorer symmetry over the input alphabet before building (default: on).
    pub fn verify_scorer(mut self, enabled: bool) -> Self {
        self.verify_scorer = enabled;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set an optional random seed.
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the engine with its population initialized.
    pub fn build<S: SubstitutionScorer>(self, scorer: S) -> Result<Engine<S>, BuilderError> {
        let sequences = self
            .sequences
            .ok_or(BuilderError::MissingRequired("sequences"))?;
        if sequences.is_empty() {
            return Err(BuilderError::NoSequences);
        }
        let population_size = self
            .population_size
            .ok_or(BuilderError::MissingRequired("population_size"))?;
        if population_size == 0 {
            return Err(ConfigError::EmptyPopulation.into());
        }

        if self.verify_scorer {
            let symbols = sequences
                .iter()
                .flat_map(|seq| seq.residues().iter().copied())
                .chain(std::iter::once(Residue::GAP));
            verify_symmetry(&scorer, symbols)?;
        }

        let mut engine = Engine::new(sequences, scorer, self.seed);
        engine.initialize(population_size);
        if self.conservation_profile {
            let inputs = engine.sequences().to_vec();
            engine.set_conservation_profile(&inputs);
        }
        Ok(engine)
    }
}
