//! Alignment scoring.
//!
//! - **Matrix**: substitution score providers (BLOSUM62 and the trait any
//!   other provider implements)
//! - **Pairs**: per-column residue pair extraction
//! - **Evaluator**: summing substitution scores over a candidate's pairs

pub mod evaluator;
pub mod matrix;
pub mod pairs;

pub use evaluator::{evaluate_pair_set, evaluate_population, LOOKUP_PENALTY};
pub use matrix::{verify_symmetry, Blosum62, SubstitutionScorer};
pub use pairs::{column_pairs, extract_pair_sets, PairSet, ResiduePair};
