//! Population management.
//!
//! A `Population` is a fixed-size, ordered collection of candidate
//! alignments. Its size never changes after creation; elitism replaces a
//! candidate in place.

use crate::alignment::Candidate;
use crate::base::Sequence;

/// An ordered population of candidate alignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// Create a population from candidates.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Seed a population with `size` copies of the unaligned input.
    pub fn seeded(sequences: &[Sequence], size: usize) -> Self {
        let template = Candidate::new(sequences.to_vec());
        Self {
            candidates: vec![template; size],
        }
    }

    /// Get the number of candidates in the population.
    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get all candidates as a slice.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Get mutable access to candidates.
    pub fn candidates_mut(&mut self) -> &mut [Candidate] {
        &mut self.candidates
    }

    /// Get a specific candidate by index.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Overwrite the candidate at `target` with a deep copy of the candidate
    /// at `source`. No-op when the indices are equal or out of range.
    pub fn replace(&mut self, target: usize, source: usize) {
        if target == source || source >= self.size() || target >= self.size() {
            return;
        }
        let copy = self.candidates[source].clone();
        self.candidates[target] = copy;
    }

    /// Pad every candidate so its rows have equal length.
    pub fn pad_all(&mut self) {
        for candidate in &mut self.candidates {
            candidate.pad();
        }
    }
}
