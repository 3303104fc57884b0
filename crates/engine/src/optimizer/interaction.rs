//! Cell-to-cell signaling between candidates.
//!
//! Each candidate `i` accumulates a signal from every candidate `j`
//! (itself included):
//!
//! ```text
//! term(i, j) = d * exp(clip(w * (score_i - score_j)^2, -100, 100))
//! ```
//!
//! The attractive and repulsive variants differ only in their `(d, w)`
//! kernel. Both passes read the same substitution score table, so they run
//! concurrently with `rayon::join`; within a pass every `i` is an
//! independent task.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::NumericError;

/// Bound on the kernel exponent.
pub const EXPONENT_BOUND: f64 = 100.0;

/// Bound on aggregated signal sums and fitness values.
pub const SUM_BOUND: f64 = 1e10;

/// Signaling kernel constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kernel {
    /// Depth `d`: scales every term
    pub distance: f64,
    /// Width `w`: scales the squared score difference in the exponent
    pub width: f64,
}

impl Kernel {
    pub const fn new(distance: f64, width: f64) -> Self {
        Self { distance, width }
    }

    /// A kernel that contributes nothing.
    pub const fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Clamp `value` to `[-bound, bound]`, rejecting NaN.
pub fn clip(value: f64, bound: f64) -> Result<f64, NumericError> {
    if value.is_nan() {
        return Err(NumericError::NotANumber);
    }
    Ok(value.clamp(-bound, bound))
}

/// Signal received by a candidate scoring `own` from one scoring `other`.
pub fn signal_term(kernel: Kernel, own: f64, other: f64) -> Result<f64, NumericError> {
    for v in [own, other, kernel.distance, kernel.width] {
        if !v.is_finite() {
            return Err(NumericError::NonFinite(v));
        }
    }
    let diff = (own - other).powi(2);
    let exponent = clip(kernel.width * diff, EXPONENT_BOUND)?;
    let term = kernel.distance * exponent.exp();
    if term.is_nan() {
        Err(NumericError::NotANumber)
    } else {
        Ok(term)
    }
}

/// Total signal received by candidate `index` from every candidate in `scores`.
///
/// A term that fails contributes 0. The sum is clipped to `SUM_BOUND`.
pub fn aggregate(kernel: Kernel, scores: &[f64], index: usize) -> Result<f64, NumericError> {
    let own = scores[index];
    let total: f64 = scores
        .iter()
        .map(|&other| signal_term(kernel, own, other).unwrap_or(0.0))
        .sum();
    clip(total, SUM_BOUND)
}

/// One pass: the aggregated signal for every candidate. Failures yield 0.
pub fn signal_table(kernel: Kernel, scores: &[f64]) -> Vec<f64> {
    (0..scores.len())
        .into_par_iter()
        .map(|i| aggregate(kernel, scores, i).unwrap_or(0.0))
        .collect()
}

/// Run the attraction and repulsion passes concurrently.
///
/// Returns `(attraction, repulsion)`, both index-aligned with `scores`.
pub fn attraction_repulsion(
    scores: &[f64],
    attraction: Kernel,
    repulsion: Kernel,
) -> (Vec<f64>, Vec<f64>) {
    rayon::join(
        || signal_table(attraction, scores),
        || signal_table(repulsion, scores),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_term_identical_scores() {
        let k = Kernel::new(0.1, 0.002);
        assert_eq!(signal_term(k, 5.0, 5.0), Ok(0.1));
    }

    #[test]
    fn test_signal_term_formula() {
        let k = Kernel::new(-0.5, 0.01);
        let expected = -0.5 * (0.01f64 * 9.0).exp();
        let got = signal_term(k, 2.0, -1.0).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn test_signal_term_exponent_clipped() {
        let k = Kernel::new(1.0, 1.0);
        let got = signal_term(k, 1e6, 0.0).unwrap();
        assert_eq!(got, EXPONENT_BOUND.exp());

        let k = Kernel::new(1.0, -1.0);
        let got = signal_term(k, 1e6, 0.0).unwrap();
        assert_eq!(got, (-EXPONENT_BOUND).exp());
    }

    #[test]
    fn test_signal_term_rejects_non_finite() {
        let k = Kernel::new(f64::NAN, 1.0);
        assert!(signal_term(k, 0.0, 0.0).is_err());
        let k = Kernel::new(1.0, 1.0);
        assert_eq!(
            signal_term(k, f64::INFINITY, 0.0),
            Err(NumericError::NonFinite(f64::INFINITY))
        );
    }

    #[test]
    fn test_aggregate_includes_self() {
        let k = Kernel::new(1.0, 0.0);
        // Every term is 1.0; three candidates including self.
        assert_eq!(aggregate(k, &[1.0, 2.0, 3.0], 0), Ok(3.0));
    }

    #[test]
    fn test_aggregate_clipped() {
        let k = Kernel::new(1e9, 1.0);
        let scores = [0.0, 1e3];
        assert_eq!(aggregate(k, &scores, 0), Ok(SUM_BOUND));
    }

    #[test]
    fn test_failed_terms_contribute_zero() {
        let k = Kernel::new(1.0, 0.0);
        let scores = [1.0, f64::NAN, 1.0];
        assert_eq!(aggregate(k, &scores, 0), Ok(2.0));
        assert_eq!(signal_table(k, &scores), vec![2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_attraction_repulsion_independent_passes() {
        let scores = [10.0, 12.0, 15.0];
        let attract = Kernel::new(0.1, 0.002);
        let repel = Kernel::new(-0.1, 0.001);
        let (a, r) = attraction_repulsion(&scores, attract, repel);
        assert_eq!(a, signal_table(attract, &scores));
        assert_eq!(r, signal_table(repel, &scores));
        assert!(a.iter().all(|&x| x > 0.0));
        assert!(r.iter().all(|&x| x < 0.0));
    }

    #[test]
    fn test_neutral_kernel() {
        let (a, r) = attraction_repulsion(&[1.0, 2.0], Kernel::neutral(), Kernel::neutral());
        assert_eq!(a, vec![0.0, 0.0]);
        assert_eq!(r, vec![0.0, 0.0]);
    }
}
