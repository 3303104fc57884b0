//! Candidate alignments and the population that holds them.

mod candidate;
mod population;

pub use candidate::Candidate;
pub use population::Population;
