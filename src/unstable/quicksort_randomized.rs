//! Recursive quicksort that picks its pivot uniformly at random.
//!
//! The random pivot makes the sorted and reverse sorted worst cases of the plain recursive variant
//! unlikely. Pass your own `Rng` to `quicksort_with_rng` for reproducible runs.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::partition::randomized_partition;

// Degenerates on inputs with many duplicates, every element equal to the pivot lands on one side.
sort_impl!("quicksort_randomized_unstable", 2_048);

/// Seed of the pivot generator behind `sort` and `sort_by`.
///
/// Sorting the same input twice performs the same comparisons, which the panic and comparison
/// counting tests rely on.
pub const PIVOT_SEED: u64 = 0x5eed_0f_9a17;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort_with_rng(v, &mut StdRng::seed_from_u64(PIVOT_SEED), &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort_with_rng(
        v,
        &mut StdRng::seed_from_u64(PIVOT_SEED),
        &mut |a, b| compare(a, b) == Ordering::Less,
    );
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Sorts `v` with pivots drawn from the thread local generator.
pub fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort_with_rng(v, &mut rand::thread_rng(), is_less);
}

pub fn quicksort_with_rng<T, F, R>(v: &mut [T], rng: &mut R, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let pivot_pos = randomized_partition(v, 0, len - 1, rng, is_less);

    let (left, right) = v.split_at_mut(pivot_pos);
    quicksort_with_rng(left, rng, is_less);
    quicksort_with_rng(&mut right[1..], rng, is_less);
}
