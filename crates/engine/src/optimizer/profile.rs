//! Conservation profile.
//!
//! The profile holds one weight per column of the longest input sequence:
//! the Shannon entropy (base 2) of the non-gap symbols at that column,
//! min-max normalized over the whole profile. High values mark poorly
//! conserved columns, where gap insertion does the least damage.

use crate::base::{Residue, Sequence};

/// Raw entropy assigned to a column with no non-gap symbols.
pub const EMPTY_COLUMN_ENTROPY: f64 = 1.0;

/// Added to the normalization denominator so a flat profile does not divide by zero.
pub const NORMALIZATION_EPSILON: f64 = 1e-10;

/// Per-column normalized conservation weights in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConservationProfile {
    values: Vec<f64>,
}

impl ConservationProfile {
    /// Build the profile from the original, unaligned sequences.
    ///
    /// Sequences shorter than a column contribute a gap to it.
    pub fn from_sequences(sequences: &[Sequence]) -> Self {
        let width = sequences.iter().map(Sequence::len).max().unwrap_or(0);

        let raw: Vec<f64> = (0..width)
            .map(|col| {
                let column: Vec<Residue> = sequences
                    .iter()
                    .map(|seq| seq.get(col).unwrap_or(Residue::GAP))
                    .collect();
                column_entropy(&column).unwrap_or(EMPTY_COLUMN_ENTROPY)
            })
            .collect();

        Self {
            values: normalize(raw),
        }
    }

    /// Wrap precomputed weights.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Shannon entropy (bits) of the non-gap symbol distribution of `column`.
///
/// Returns `None` when the column holds only gaps.
pub fn column_entropy(column: &[Residue]) -> Option<f64> {
    let mut counts = [0usize; 256];
    let mut total = 0usize;
    for residue in column.iter().filter(|r| !r.is_gap()) {
        counts[residue.to_ascii() as usize] += 1;
        total += 1;
    }
    if total == 0 {
        return None;
    }

    let total = total as f64;
    let entropy = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>();
    Some(entropy)
}

fn normalize(raw: Vec<f64>) -> Vec<f64> {
    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min + NORMALIZATION_EPSILON;
    raw.into_iter().map(|v| (v - min) / range).collect()
}
