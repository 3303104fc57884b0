//! Substitution score evaluation.
//!
//! Each candidate's score is the sum of the scorer's values over its pair
//! set. Candidates are scored independently, one rayon task per candidate,
//! and each result lands in that candidate's own slot.

use rayon::prelude::*;

use crate::scoring::{PairSet, SubstitutionScorer};

/// Score charged for a pair the scorer cannot look up.
pub const LOOKUP_PENALTY: f64 = -8.0;

/// Sum the substitution scores of every pair in `pairs`.
///
/// Lookup failures are charged `LOOKUP_PENALTY` and evaluation continues.
pub fn evaluate_pair_set<S>(scorer: &S, pairs: &PairSet) -> f64
where
    S: SubstitutionScorer + ?Sized,
{
    pairs
        .pairs()
        .iter()
        .map(|pair| {
            scorer
                .score(pair.first(), pair.second())
                .unwrap_or(LOOKUP_PENALTY)
        })
        .sum()
}

/// Score every pair set in parallel. The output is index-aligned with the input.
pub fn evaluate_population<S>(scorer: &S, pair_sets: &[PairSet]) -> Vec<f64>
where
    S: SubstitutionScorer + ?Sized,
{
    pair_sets
        .par_iter()
        .map(|pairs| evaluate_pair_set(scorer, pairs))
        .collect()
}
