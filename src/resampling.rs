use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// The resampling scheme used to build the null distribution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResamplingMode {
    /// Pool both cohorts and reshuffle the group labels without replacement.
    Permutation,
    /// Pool both cohorts and draw both groups from the pool with replacement. Groups
    /// may contain duplicate subjects and omit others.
    Bootstrap,
}

/// Indices into the pooled subjects (cohort A first, then cohort B) for one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Partition {
    pub(crate) group_a: Vec<usize>,
    pub(crate) group_b: Vec<usize>,
}

impl ResamplingMode {
    /// Draws a random split of `n_a + n_b` pooled subjects into groups of the original
    /// sizes.
    pub(crate) fn draw_partition<R: Rng>(&self, n_a: usize, n_b: usize, rng: &mut R) -> Partition {
        let n_pooled = n_a + n_b;
        let mut indices: Vec<usize> = match *self {
            Self::Permutation => {
                let mut indices: Vec<usize> = (0..n_pooled).collect();
                indices.shuffle(rng);
                indices
            }
            Self::Bootstrap => (0..n_pooled).map(|_| rng.gen_range(0..n_pooled)).collect(),
        };
        let group_b = indices.split_off(n_a);
        Partition { group_a: indices, group_b }
    }
}

/// The random generator owned by a single trial.
pub(crate) fn trial_rng(seed: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(u64::from(seed))
}

/// Draws one distinct seed per trial from the operating system's entropy source.
/// `n_trials` is capped at `2^32`, the number of distinct seeds.
pub fn draw_seeds(n_trials: usize) -> Vec<u32> {
    let n_seeds = usize::try_from(u64::from(u32::MAX) + 1).map_or(n_trials, |max| n_trials.min(max));
    let mut drawn = HashSet::with_capacity(n_seeds);
    let mut seeds = Vec::with_capacity(n_seeds);
    while seeds.len() < n_seeds {
        let seed = OsRng.next_u32();
        if drawn.insert(seed) {
            seeds.push(seed);
        }
    }
    seeds
}
