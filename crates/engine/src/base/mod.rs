//! Base types for residue and sequence representation.
//!
//! This module provides the foundational types for representing residues
//! and gapped sequences in the bactalign library.

mod residue;
mod sequence;

pub use residue::Residue;
pub use sequence::Sequence;
