//! Pairwise column extraction.
//!
//! For every column of a candidate, the unordered residue pairs occurring in
//! that column are collected, canonicalized and de-duplicated. Duplicates are
//! only removed within a column: the same pair seen in two columns counts
//! twice.

use rayon::prelude::*;

use crate::alignment::{Candidate, Population};
use crate::base::Residue;

/// An unordered residue pair stored with its elements sorted, so that
/// `(a, b)` and `(b, a)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResiduePair(Residue, Residue);

impl ResiduePair {
    pub fn new(a: Residue, b: Residue) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    #[inline]
    pub fn first(&self) -> Residue {
        self.0
    }

    #[inline]
    pub fn second(&self) -> Residue {
        self.1
    }
}

/// Unique canonical pairs among the symbols of one column.
pub fn column_pairs(column: &[Residue]) -> Vec<ResiduePair> {
    let mut pairs = Vec::with_capacity(column.len() * column.len().saturating_sub(1) / 2);
    for (i, &a) in column.iter().enumerate() {
        for &b in &column[i + 1..] {
            pairs.push(ResiduePair::new(a, b));
        }
    }
    pairs.sort_unstable();
    pairs.dedup();
    pairs
}

/// All column pair sets of one candidate, concatenated in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSet {
    pairs: Vec<ResiduePair>,
    /// Exclusive end offset into `pairs` of each column.
    column_ends: Vec<usize>,
}

impl PairSet {
    /// Extract the pair set of a candidate.
    pub fn from_candidate(candidate: &Candidate) -> Self {
        let columns = candidate.columns();
        let mut set = PairSet {
            pairs: Vec::new(),
            column_ends: Vec::with_capacity(columns),
        };
        for col in 0..columns {
            set.pairs.extend(column_pairs(&candidate.column(col)));
            set.column_ends.push(set.pairs.len());
        }
        set
    }

    pub fn pairs(&self) -> &[ResiduePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of columns the set was extracted from.
    pub fn columns(&self) -> usize {
        self.column_ends.len()
    }

    /// Pairs contributed by `column`.
    pub fn column(&self, column: usize) -> Option<&[ResiduePair]> {
        let end = *self.column_ends.get(column)?;
        let start = if column == 0 {
            0
        } else {
            self.column_ends[column - 1]
        };
        Some(&self.pairs[start..end])
    }
}

/// Extract one pair set per candidate, in population order.
pub fn extract_pair_sets(population: &Population) -> Vec<PairSet> {
    population
        .candidates()
        .par_iter()
        .map(PairSet::from_candidate)
        .collect()
}
