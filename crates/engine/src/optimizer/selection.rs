//! Fitness aggregation and elitist selection.
//!
//! Interaction is attraction plus repulsion; fitness is substitution score
//! plus interaction. Both sums are clipped to `SUM_BOUND`. A NaN result
//! falls back to 0 for interaction and to the substitution score for
//! fitness. The best candidate (first maximum) then overwrites the worst
//! (first minimum).

use crate::errors::NumericError;
use crate::optimizer::interaction::{clip, SUM_BOUND};

/// Per-candidate scalar tables for one iteration.
///
/// Every table is index-aligned with the population and reset to 0 before
/// the next iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTables {
    pub substitution: Vec<f64>,
    pub attraction: Vec<f64>,
    pub repulsion: Vec<f64>,
    pub interaction: Vec<f64>,
    pub fitness: Vec<f64>,
}

impl ScoreTables {
    /// Tables for `size` candidates, all zero.
    pub fn new(size: usize) -> Self {
        Self {
            substitution: vec![0.0; size],
            attraction: vec![0.0; size],
            repulsion: vec![0.0; size],
            interaction: vec![0.0; size],
            fitness: vec![0.0; size],
        }
    }

    /// Reset every entry to 0, resizing to `size`.
    pub fn reset(&mut self, size: usize) {
        for table in [
            &mut self.substitution,
            &mut self.attraction,
            &mut self.repulsion,
            &mut self.interaction,
            &mut self.fitness,
        ] {
            table.clear();
            table.resize(size, 0.0);
        }
    }

    pub fn size(&self) -> usize {
        self.substitution.len()
    }

    /// Fill `interaction` from `attraction` and `repulsion`.
    pub fn fill_interaction(&mut self) {
        self.interaction = self
            .attraction
            .iter()
            .zip(&self.repulsion)
            .map(|(&a, &r)| combine_interaction(a, r).unwrap_or(0.0))
            .collect();
    }

    /// Fill `fitness` from `substitution` and `interaction`.
    pub fn fill_fitness(&mut self) {
        self.fitness = self
            .substitution
            .iter()
            .zip(&self.interaction)
            .map(|(&s, &i)| combine_fitness(s, i).unwrap_or(s))
            .collect();
    }
}

/// Clipped attraction + repulsion.
pub fn combine_interaction(attraction: f64, repulsion: f64) -> Result<f64, NumericError> {
    clip(attraction + repulsion, SUM_BOUND)
}

/// Clipped substitution score + interaction.
pub fn combine_fitness(substitution: f64, interaction: f64) -> Result<f64, NumericError> {
    clip(substitution + interaction, SUM_BOUND)
}

/// Indices of the best and worst candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub best: usize,
    pub worst: usize,
}

/// Locate the first maximum and first minimum of `fitness`.
///
/// Returns `None` for an empty table.
pub fn select(fitness: &[f64]) -> Option<Selection> {
    if fitness.is_empty() {
        return None;
    }
    let mut best = 0;
    let mut worst = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
        if f < fitness[worst] {
            worst = i;
        }
    }
    Some(Selection { best, worst })
}
