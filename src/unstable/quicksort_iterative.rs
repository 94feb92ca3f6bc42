//! Quicksort driven by an explicit stack of ranges instead of recursion.
//!
//! Produces exactly the same output as the recursive variant, the ranges are partitioned with the
//! same Lomuto scheme, only the order in which they are visited differs. Stack depth is bounded by
//! heap memory, not by the thread stack.

use std::cmp::Ordering;

use crate::partition::lomuto_partition;

// Quadratic on sorted inputs.
sort_impl!("quicksort_iterative_unstable", 10_000);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

pub fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Inclusive `(low, high)` ranges, only ranges with two or more elements are ever pushed.
    let mut stack: Vec<(usize, usize)> = vec![(0, len - 1)];

    while let Some((low, high)) = stack.pop() {
        let pivot_pos = lomuto_partition(v, low, high, is_less);

        if pivot_pos - low >= 2 {
            stack.push((low, pivot_pos - 1));
        }

        if high - pivot_pos >= 2 {
            stack.push((pivot_pos + 1, high));
        }
    }
}
