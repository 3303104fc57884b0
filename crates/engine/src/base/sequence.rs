use std::fmt;
use std::str::FromStr;

use super::Residue;
use crate::errors::InvalidResidue;

/// Gapped sequence backed by a vector of Residues.
///
/// A `Sequence` starts out as an unaligned input and grows as the optimizer
/// inserts gaps into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Residue>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Sequence` from a vector of `Residue`s.
    pub fn from_residues(residues: Vec<Residue>) -> Self {
        Self(residues)
    }

    /// Return the length of the sequence, gaps included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no symbols.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of non-gap residues.
    pub fn ungapped_len(&self) -> usize {
        self.0.iter().filter(|r| !r.is_gap()).count()
    }

    /// Return the `Residue` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Residue> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying `Residue` slice.
    #[inline]
    pub fn residues(&self) -> &[Residue] {
        &self.0
    }

    /// Insert a gap at `index`, shifting subsequent residues right.
    ///
    /// Panics if `index > len` (matching `Vec::insert`).
    #[inline]
    pub fn insert_gap(&mut self, index: usize) {
        self.0.insert(index, Residue::GAP);
    }

    /// Right-pad with gaps up to `len`. Longer sequences are left untouched.
    pub fn pad_to(&mut self, len: usize) {
        if self.0.len() < len {
            self.0.resize(len, Residue::GAP);
        }
    }

    /// The sequence with every gap removed.
    pub fn ungapped(&self) -> Sequence {
        Self(self.0.iter().copied().filter(|r| !r.is_gap()).collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &residue in &self.0 {
            write!(f, "{}", residue.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidResidue;

    /// Parse a textual representation (e.g. "MKV-LA") into a `Sequence`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let residues: Result<Vec<Residue>, _> = s.bytes().map(Residue::try_from).collect();
        Ok(Self(residues?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_from_str() {
        let seq: Sequence = "acg-T".parse().unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string(), "ACG-T");
        assert_eq!(seq.ungapped_len(), 4);
    }

    #[test]
    fn test_sequence_from_str_invalid() {
        assert!("AC GT".parse::<Sequence>().is_err());
    }

    #[test]
    fn test_insert_gap_positions() {
        let mut seq: Sequence = "ACGT".parse().unwrap();
        seq.insert_gap(0);
        assert_eq!(seq.to_string(), "-ACGT");
        seq.insert_gap(5);
        assert_eq!(seq.to_string(), "-ACGT-");
        seq.insert_gap(3);
        assert_eq!(seq.to_string(), "-AC-GT-");
    }

    #[test]
    fn test_insert_gap_into_empty() {
        let mut seq = Sequence::new();
        seq.insert_gap(0);
        assert_eq!(seq.to_string(), "-");
    }

    #[test]
    fn test_pad_to() {
        let mut seq: Sequence = "AC".parse().unwrap();
        seq.pad_to(5);
        assert_eq!(seq.to_string(), "AC---");
        seq.pad_to(3);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_ungapped_roundtrip() {
        let seq: Sequence = "-A-C--G".parse().unwrap();
        assert_eq!(seq.ungapped().to_string(), "ACG");
    }
}
