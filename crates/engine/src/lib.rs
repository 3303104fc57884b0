//! # Engine Crate
//!
//! The `engine` crate provides the core logic for aligning multiple sequences
//! by bacterial foraging optimization. It includes modules for representing
//! residues and sequences, scoring alignment columns against a substitution
//! matrix, the optimization operators (chemotaxis, cell interaction, elitism)
//! and a driver that runs a complete optimization.

pub mod alignment;
pub mod base;
pub mod driver;
pub mod errors;
pub mod fasta;
pub mod optimizer;
pub mod prelude;
pub mod scoring;

pub use base::{Residue, Sequence};
