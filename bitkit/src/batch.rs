//! Parallel helpers over many buffers
//!
//! Comparers hold no mutable state, so one instance is shared by reference
//! across the rayon pool.

use std::cmp::Ordering;

use bitkit_core::{BufferComparer, ByteSource, MemCompare};
use rayon::prelude::*;

/// Items per rayon task below which splitting costs more than it saves
const MIN_ITEMS_PER_TASK: usize = 64;

/// Hash code of every buffer, in input order
pub fn hash_all<M, S>(comparer: &BufferComparer<M>, buffers: &[S]) -> Vec<i32>
where
    M: MemCompare + Sync,
    S: ByteSource + Sync,
{
    buffers
        .par_iter()
        .with_min_len(MIN_ITEMS_PER_TASK)
        .map(|buffer| comparer.hash(buffer))
        .collect()
}

/// Ordering of each `(x, y)` pair, in input order
pub fn compare_pairs<M, A, B>(comparer: &BufferComparer<M>, pairs: &[(A, B)]) -> Vec<Ordering>
where
    M: MemCompare + Sync,
    A: ByteSource + Sync,
    B: ByteSource + Sync,
{
    pairs
        .par_iter()
        .with_min_len(MIN_ITEMS_PER_TASK)
        .map(|(x, y)| comparer.compare(x, y))
        .collect()
}

/// Sort each group independently, groups in parallel
pub fn sort_many<M, S>(comparer: &BufferComparer<M>, groups: &mut [Vec<S>])
where
    M: MemCompare + Sync,
    S: ByteSource + Send,
{
    groups
        .par_iter_mut()
        .for_each(|group| comparer.sort_buffers(group));
}

/// Sort one large collection with rayon's parallel unstable sort
///
/// Produces the same order as [`BufferComparer::sort_buffers`]; equal
/// buffers may land in a different relative order.
pub fn par_sort_buffers<M, S>(comparer: &BufferComparer<M>, buffers: &mut [S])
where
    M: MemCompare + Sync,
    S: ByteSource + Send,
{
    buffers.par_sort_unstable_by(|a, b| comparer.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitkit_core::{Fidelity, HashSeed};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_buffers(rng: &mut StdRng, count: usize) -> Vec<Vec<u8>> {
        (0..count)
            .map(|_| {
                let len = rng.gen_range(0..12);
                (0..len).map(|_| rng.gen_range(0..4)).collect()
            })
            .collect()
    }

    #[test]
    fn test_hash_all_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(11);
        let buffers = random_buffers(&mut rng, 1_000);
        for comparer in [
            BufferComparer::DEFAULT,
            BufferComparer::block(Fidelity::new(5), HashSeed::new(42)),
        ] {
            let expected: Vec<i32> = buffers.iter().map(|b| comparer.hash(b)).collect();
            assert_eq!(hash_all(&comparer, &buffers), expected);
        }
    }

    #[test]
    fn test_compare_pairs_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(12);
        let left = random_buffers(&mut rng, 500);
        let right = random_buffers(&mut rng, 500);
        let pairs: Vec<(&[u8], &[u8])> = left
            .iter()
            .zip(&right)
            .map(|(x, y)| (x.as_slice(), y.as_slice()))
            .collect();

        let comparer = BufferComparer::DEFAULT;
        let orderings = compare_pairs(&comparer, &pairs);
        for ((x, y), ordering) in pairs.iter().zip(orderings) {
            assert_eq!(comparer.compare(x, y), ordering);
        }
    }

    #[test]
    fn test_sorts_agree() {
        let mut rng = StdRng::seed_from_u64(13);
        let comparer = BufferComparer::DEFAULT;
        let mut groups: Vec<Vec<Vec<u8>>> = (0..16).map(|_| random_buffers(&mut rng, 300)).collect();
        let mut flat: Vec<Vec<u8>> = groups.concat();
        let mut flat_sequential = flat.clone();

        sort_many(&comparer, &mut groups);
        for group in &groups {
            assert!(group
                .windows(2)
                .all(|w| comparer.compare(&w[0], &w[1]) != Ordering::Greater));
        }

        par_sort_buffers(&comparer, &mut flat);
        comparer.sort_buffers(&mut flat_sequential);
        // Equal buffers are indistinguishable, so the orders match exactly
        assert_eq!(flat, flat_sequential);
    }
}
