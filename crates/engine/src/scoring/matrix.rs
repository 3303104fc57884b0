//! Substitution score providers.

use crate::base::Residue;
use crate::errors::{ConfigError, ScoreError};

/// Trait for residue substitution scoring.
///
/// Implementors must be symmetric: `score(a, b) == score(b, a)`. A lookup
/// failure is reported as `ScoreError` and converted to a fixed penalty by
/// the evaluator.
pub trait SubstitutionScorer: Send + Sync {
    fn score(&self, a: Residue, b: Residue) -> Result<f64, ScoreError>;
}

impl<T: SubstitutionScorer + ?Sized> SubstitutionScorer for &T {
    fn score(&self, a: Residue, b: Residue) -> Result<f64, ScoreError> {
        (**self).score(a, b)
    }
}

/// Matrix dimension: 24 amino acid symbols.
const AA_DIM: usize = 24;

/// Row/column order of the matrix.
const AA_ORDER: &[u8; AA_DIM] = b"ARNDCQEGHILKMFPSTWYVBZX*";

/// Byte to matrix index, `u8::MAX` for symbols outside the matrix.
const AA_LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [u8::MAX; 256];
    let mut i = 0;
    while i < AA_DIM {
        table[AA_ORDER[i] as usize] = i as u8;
        i += 1;
    }
    table
}

#[inline]
fn aa_index(residue: Residue) -> Option<usize> {
    match AA_LOOKUP[residue.to_ascii() as usize] {
        u8::MAX => None,
        idx => Some(idx as usize),
    }
}

/// The BLOSUM62 protein substitution matrix.
///
/// Covers the 20 standard amino acids plus B, Z, X and `*`. Pairs involving
/// a gap or any other symbol are lookup failures unless a gap score is set
/// with [`Blosum62::with_gap_score`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Blosum62 {
    gap_score: Option<f64>,
}

impl Blosum62 {
    pub fn new() -> Self {
        Self { gap_score: None }
    }

    /// Score every pair that contains a gap with `score` instead of failing.
    pub fn with_gap_score(score: f64) -> Self {
        Self {
            gap_score: Some(score),
        }
    }

    /// Symbols the matrix knows about.
    pub fn alphabet() -> impl Iterator<Item = Residue> {
        AA_ORDER.iter().filter_map(|&b| Residue::from_ascii(b))
    }
}

impl SubstitutionScorer for Blosum62 {
    fn score(&self, a: Residue, b: Residue) -> Result<f64, ScoreError> {
        if a.is_gap() || b.is_gap() {
            if let Some(gap) = self.gap_score {
                return Ok(gap);
            }
        }
        match (aa_index(a), aa_index(b)) {
            (Some(i), Some(j)) => Ok(f64::from(BLOSUM62[i * AA_DIM + j])),
            _ => Err(ScoreError::UnknownPair {
                a: a.to_char(),
                b: b.to_char(),
            }),
        }
    }
}

/// Check that `scorer` is symmetric over every pair drawn from `residues`.
///
/// Lookup failures count as symmetric only when both orders fail.
pub fn verify_symmetry<S, I>(scorer: &S, residues: I) -> Result<(), ConfigError>
where
    S: SubstitutionScorer + ?Sized,
    I: IntoIterator<Item = Residue>,
{
    let mut symbols: Vec<Residue> = residues.into_iter().collect();
    symbols.sort_unstable();
    symbols.dedup();

    for (i, &a) in symbols.iter().enumerate() {
        for &b in &symbols[i + 1..] {
            let ab = scorer.score(a, b);
            let ba = scorer.score(b, a);
            let symmetric = match (ab, ba) {
                (Ok(x), Ok(y)) => x == y || (x.is_nan() && y.is_nan()),
                (Err(_), Err(_)) => true,
                _ => false,
            };
            if !symmetric {
                return Err(ConfigError::AsymmetricScorer {
                    a: a.to_char(),
                    b: b.to_char(),
                    ab: ab.unwrap_or(f64::NAN),
                    ba: ba.unwrap_or(f64::NAN),
                });
            }
        }
    }
    Ok(())
}

// NCBI BLOSUM62, row-major.
#[rustfmt::skip]
const BLOSUM62: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4, // A
    -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
    -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
    -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4, // D
     0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4, // C
    -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4, // Q
    -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // E
     0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4, // G
    -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
    -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4, // I
    -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4, // L
    -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
    -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4, // M
    -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4, // F
    -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4, // T
    -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4, // W
    -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4, // Y
     0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
    -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
    -1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4, // X
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

#[cfg(test)]
mod tests {
    use super::*;

    fn r(c: char) -> Residue {
        Residue::try_from(c).unwrap()
    }

    #[test]
    fn test_blosum62_diagonal() {
        let m = Blosum62::new();
        assert_eq!(m.score(r('A'), r('A')), Ok(4.0));
        assert_eq!(m.score(r('W'), r('W')), Ok(11.0));
        assert_eq!(m.score(r('c'), r('C')), Ok(9.0));
    }

    #[test]
    fn test_blosum62_off_diagonal() {
        let m = Blosum62::new();
        assert_eq!(m.score(r('A'), r('T')), Ok(0.0));
        assert_eq!(m.score(r('A'), r('R')), Ok(-1.0));
        assert_eq!(m.score(r('W'), r('D')), Ok(-4.0));
    }

    #[test]
    fn test_blosum62_gap_fails_by_default() {
        let m = Blosum62::new();
        assert_eq!(
            m.score(Residue::GAP, r('A')),
            Err(ScoreError::UnknownPair { a: '-', b: 'A' })
        );
        assert!(m.score(Residue::GAP, Residue::GAP).is_err());
        assert!(m.score(r('J'), r('A')).is_err());
    }

    #[test]
    fn test_blosum62_with_gap_score() {
        let m = Blosum62::with_gap_score(-4.0);
        assert_eq!(m.score(Residue::GAP, r('A')), Ok(-4.0));
        assert_eq!(m.score(Residue::GAP, Residue::GAP), Ok(-4.0));
        assert_eq!(m.score(r('A'), r('A')), Ok(4.0));
    }

    #[test]
    fn test_blosum62_is_symmetric() {
        let m = Blosum62::new();
        let symbols = Blosum62::alphabet().chain([Residue::GAP, r('J')]);
        assert_eq!(verify_symmetry(&m, symbols), Ok(()));
    }

    struct Lopsided;

    impl SubstitutionScorer for Lopsided {
        fn score(&self, a: Residue, b: Residue) -> Result<f64, ScoreError> {
            if a < b {
                Ok(1.0)
            } else {
                Ok(0.0)
            }
        }
    }

    #[test]
    fn test_asymmetric_scorer_is_flagged() {
        let err = verify_symmetry(&Lopsided, [r('A'), r('C')]).unwrap_err();
        assert!(matches!(err, ConfigError::AsymmetricScorer { a: 'A', b: 'C', .. }));
    }
}
