//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use bactalign_engine::prelude::*;
//! use std::str::FromStr;
//!
//! let seq = Sequence::from_str("MKV-LA").unwrap();
//! assert_eq!(seq.ungapped_len(), 5);
//! ```

pub use crate::alignment::{Candidate, Population};
pub use crate::base::{Residue, Sequence};
pub use crate::driver::{run_optimization, OptimizerConfig, RunResult};
pub use crate::errors;
pub use crate::fasta::{parse_fasta, write_alignment, FastaRecord};
pub use crate::optimizer::{Engine, EngineBuilder, IterationConfig, IterationOutcome, Kernel};
pub use crate::scoring::{Blosum62, SubstitutionScorer};
