//! Optimization engine.
//!
//! This module provides the iteration loop body that chains chemotaxis,
//! pair extraction, substitution scoring, cell interaction, fitness
//! aggregation and elitism over an owned population.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

use crate::alignment::{Candidate, Population};
use crate::base::Sequence;
use crate::errors::ConfigError;
use crate::optimizer::selection::{self, ScoreTables};
use crate::optimizer::{chemotaxis, interaction, ConservationProfile, IterationConfig, IterationOutcome};
use crate::scoring::{evaluate_population, extract_pair_sets, SubstitutionScorer};

/// Bacterial foraging optimization engine.
///
/// The engine exclusively owns its population and score tables; callers
/// only see them between iterations.
#[derive(Debug)]
pub struct Engine<S> {
    /// Original, unaligned input
    sequences: Vec<Sequence>,
    /// Current population
    population: Population,
    /// Substitution score provider
    scorer: S,
    /// Conservation profile, when gap placement is biased
    profile: Option<ConservationProfile>,
    /// Tables of the last completed iteration
    tables: ScoreTables,
    /// Cumulative candidate evaluations
    evaluations: u64,
    /// Completed iterations
    iteration: usize,
    /// Random number generator (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
}

impl<S: SubstitutionScorer> Engine<S> {
    /// Create an engine over `sequences` with an empty population.
    ///
    /// Call [`Engine::initialize`] before running iterations.
    pub fn new(sequences: Vec<Sequence>, scorer: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        Self {
            sequences,
            population: Population::new(Vec::new()),
            scorer,
            profile: None,
            tables: ScoreTables::default(),
            evaluations: 0,
            iteration: 0,
            rng,
        }
    }

    /// Create an engine that continues from an existing population.
    pub fn from_population(
        sequences: Vec<Sequence>,
        population: Population,
        scorer: S,
        seed: Option<u64>,
    ) -> Self {
        let mut engine = Self::new(sequences, scorer, seed);
        engine.population = population;
        engine
    }

    /// Seed the population with `population_size` copies of the input.
    pub fn initialize(&mut self, population_size: usize) {
        self.population = Population::seeded(&self.sequences, population_size);
        self.tables = ScoreTables::new(population_size);
        self.iteration = 0;
    }

    /// Compute and retain the conservation profile of `sequences`.
    pub fn set_conservation_profile(&mut self, sequences: &[Sequence]) {
        let profile = ConservationProfile::from_sequences(sequences);
        debug!(columns = profile.len(), "conservation profile computed");
        self.profile = Some(profile);
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Owned copy of the current population.
    pub fn snapshot(&self) -> Population {
        self.population.clone()
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn profile(&self) -> Option<&ConservationProfile> {
        self.profile.as_ref()
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score tables of the last completed iteration.
    pub fn tables(&self) -> &ScoreTables {
        &self.tables
    }

    /// Cumulative number of candidate evaluations.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The candidate at `index`.
    pub fn candidate(&self, index: usize) -> Option<&Candidate> {
        self.population.get(index)
    }

    /// Best candidate of the last completed iteration.
    pub fn best(&self) -> Option<&Candidate> {
        if self.iteration == 0 {
            return None;
        }
        selection::select(&self.tables.fitness).and_then(|s| self.population.get(s.best))
    }

    /// Advance the optimization by one iteration.
    ///
    /// Stages run strictly in order; each consumes the full output of the
    /// previous one. Numeric trouble inside a stage degrades to the
    /// documented fallback values, so only an empty population is an error.
    pub fn run_iteration(&mut self, config: &IterationConfig) -> Result<IterationOutcome, ConfigError> {
        let size = self.population.size();
        if size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        self.tables.reset(size);

        // 1. Chemotaxis
        let profile = self.profile.as_ref().filter(|_| config.use_profile_bias);
        chemotaxis::apply(&mut self.population, config.tumble_count, profile, &mut self.rng);

        // 2. Pairwise extraction and substitution scoring
        let pair_sets = extract_pair_sets(&self.population);
        self.tables.substitution = evaluate_population(&self.scorer, &pair_sets);
        self.evaluations += size as u64;

        // 3. Attraction and repulsion
        let (attraction, repulsion) = interaction::attraction_repulsion(
            &self.tables.substitution,
            config.attraction(),
            config.repulsion(),
        );
        self.tables.attraction = attraction;
        self.tables.repulsion = repulsion;

        // 4. Fitness
        self.tables.fill_interaction();
        self.tables.fill_fitness();

        // 5. Elitism
        let selected = selection::select(&self.tables.fitness).ok_or(ConfigError::EmptyPopulation)?;
        let outcome = IterationOutcome {
            best_index: selected.best,
            worst_index: selected.worst,
            fitness: self.tables.fitness[selected.best],
            substitution_score: self.tables.substitution[selected.best],
            interaction_score: self.tables.interaction[selected.best],
            cumulative_evaluations: self.evaluations,
        };
        self.population.replace(selected.worst, selected.best);
        self.iteration += 1;

        debug!(
            iteration = self.iteration,
            best = outcome.best_index,
            worst = outcome.worst_index,
            fitness = outcome.fitness,
            substitution = outcome.substitution_score,
            "iteration complete"
        );

        Ok(outcome)
    }
}
