//! Resampling Primitives
//!
//! Bootstrap (per-group sample with replacement) and shuffle
//! (pool-and-redistribute across groups). Both take the random generator
//! explicitly so callers can seed it for reproducible runs.

use rand::Rng;
use rand::seq::SliceRandom;

/// Draw a bootstrap sample: a new sequence of the same length as `group`,
/// each element picked uniformly at random with replacement.
///
/// `group` must be non-empty; the drivers validate this before resampling.
pub fn bootstrap<R: Rng + ?Sized>(rng: &mut R, group: &[f64]) -> Vec<f64> {
    (0..group.len())
        .map(|_| group[rng.gen_range(0..group.len())])
        .collect()
}

/// Pool all values across `groups`, permute the pool, and re-partition it
/// into new groups with the same positional sizes as the input.
///
/// The combined multiset of values is preserved; only the assignment of
/// values to groups changes.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R, groups: &[&[f64]]) -> Vec<Vec<f64>> {
    let mut pool: Vec<f64> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    pool.shuffle(rng);

    let mut new_groups = Vec::with_capacity(groups.len());
    let mut start = 0;
    for group in groups {
        let end = start + group.len();
        new_groups.push(pool[start..end].to_vec());
        start = end;
    }
    new_groups
}
