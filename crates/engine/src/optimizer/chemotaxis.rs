//! Chemotaxis: gap insertion ("tumble") followed by padding.
//!
//! Every iteration each candidate receives a fixed number of gap insertions,
//! each into a uniformly chosen row. The insertion position is either
//! uniform over `[0, len]` or drawn with the conservation profile as weights,
//! so poorly conserved columns take most of the gaps. Rows then get
//! right-padded to a common length.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::alignment::{Candidate, Population};
use crate::optimizer::ConservationProfile;

/// Insert `gaps` gaps into `candidate`.
///
/// Rows are left at their new, possibly unequal, lengths.
pub fn tumble_candidate<R: Rng + ?Sized>(
    candidate: &mut Candidate,
    gaps: usize,
    profile: Option<&ConservationProfile>,
    rng: &mut R,
) {
    if candidate.is_empty() {
        return;
    }
    for _ in 0..gaps {
        let row = rng.random_range(0..candidate.len());
        let seq = &mut candidate.rows_mut()[row];
        let pos = insertion_position(seq.len(), profile, rng);
        seq.insert_gap(pos);
    }
}

/// Pick where to insert a gap into a row of length `len`.
///
/// With a profile and a non-empty row, positions `0..min(len, profile.len())`
/// are weighted by the profile (non-finite weights count as zero). Falls back
/// to a uniform draw over `[0, len]` when there is no profile or no usable
/// weight.
pub fn insertion_position<R: Rng + ?Sized>(
    len: usize,
    profile: Option<&ConservationProfile>,
    rng: &mut R,
) -> usize {
    if let Some(profile) = profile.filter(|_| len > 0) {
        let usable = len.min(profile.len());
        let weights = profile.values()[..usable]
            .iter()
            .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
        if let Ok(dist) = WeightedIndex::new(weights) {
            return dist.sample(rng);
        }
    }
    rng.random_range(0..=len)
}

/// Apply gap insertion to every candidate.
///
/// One seed per candidate is drawn from `rng` up front, so the outcome does
/// not depend on how rayon schedules the candidates.
pub fn tumble<R: Rng + ?Sized>(
    population: &mut Population,
    gaps: usize,
    profile: Option<&ConservationProfile>,
    rng: &mut R,
) {
    let seeds: Vec<u64> = (0..population.size()).map(|_| rng.random()).collect();

    population
        .candidates_mut()
        .par_iter_mut()
        .zip(seeds.par_iter())
        .for_each(|(candidate, &seed)| {
            let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            tumble_candidate(candidate, gaps, profile, &mut local_rng);
        });
}

/// Right-pad every row of every candidate to its candidate's longest row.
pub fn pad(population: &mut Population) {
    population
        .candidates_mut()
        .par_iter_mut()
        .for_each(Candidate::pad);
}

/// Tumble, then pad.
pub fn apply<R: Rng + ?Sized>(
    population: &mut Population,
    gaps: usize,
    profile: Option<&ConservationProfile>,
    rng: &mut R,
) {
    tumble(population, gaps, profile, rng);
    pad(population);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Sequence;
    use rand::rngs::StdRng;

    fn seqs(rows: &[&str]) -> Vec<Sequence> {
        rows.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_tumble_adds_exact_gap_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut cand = Candidate::new(seqs(&["MKVL", "MKL"]));

        tumble_candidate(&mut cand, 5, None, &mut rng);

        let total: usize = cand.rows().iter().map(Sequence::len).sum();
        assert_eq!(total, 4 + 3 + 5);
        let residues: usize = cand.rows().iter().map(Sequence::ungapped_len).sum();
        assert_eq!(residues, 7);
        assert_eq!(cand.rows()[0].ungapped().to_string(), "MKVL");
        assert_eq!(cand.rows()[1].ungapped().to_string(), "MKL");
    }

    #[test]
    fn test_uniform_position_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_end = false;
        for _ in 0..500 {
            let pos = insertion_position(3, None, &mut rng);
            assert!(pos <= 3);
            seen_end |= pos == 3;
        }
        assert!(seen_end);
    }

    #[test]
    fn test_profile_position_avoids_zero_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let profile = ConservationProfile::from_values(vec![0.0, 1.0, 0.0, f64::NAN]);
        for _ in 0..200 {
            assert_eq!(insertion_position(4, Some(&profile), &mut rng), 1);
        }
    }

    #[test]
    fn test_profile_truncated_to_row_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let profile = ConservationProfile::from_values(vec![0.5, 0.5, 1.0, 1.0, 1.0]);
        for _ in 0..200 {
            assert!(insertion_position(2, Some(&profile), &mut rng) < 2);
        }
    }

    #[test]
    fn test_all_zero_profile_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(3);
        let profile = ConservationProfile::from_values(vec![0.0, 0.0]);
        for _ in 0..100 {
            assert!(insertion_position(2, Some(&profile), &mut rng) <= 2);
        }
    }

    #[test]
    fn test_empty_row_ignores_profile() {
        let mut rng = StdRng::seed_from_u64(3);
        let profile = ConservationProfile::from_values(vec![1.0]);
        assert_eq!(insertion_position(0, Some(&profile), &mut rng), 0);
    }

    #[test]
    fn test_apply_leaves_candidates_rectangular() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pop = Population::seeded(&seqs(&["MKVLAT", "MKAT", "MVLT"]), 6);

        apply(&mut pop, 3, None, &mut rng);

        for cand in pop.candidates() {
            assert!(cand.is_rectangular());
            assert!(cand.columns() >= 6);
        }
    }

    #[test]
    fn test_pad_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pop = Population::seeded(&seqs(&["MKV", "M"]), 3);
        tumble(&mut pop, 2, None, &mut rng);
        pad(&mut pop);
        let once = pop.clone();
        pad(&mut pop);
        assert_eq!(pop, once);
    }

    #[test]
    fn test_tumble_reproducible_with_seed() {
        let start = Population::seeded(&seqs(&["MKVLAT", "MKAT"]), 8);

        let mut a = start.clone();
        let mut b = start.clone();
        tumble(&mut a, 4, None, &mut StdRng::seed_from_u64(99));
        tumble(&mut b, 4, None, &mut StdRng::seed_from_u64(99));

        assert_eq!(a, b);
    }
}
