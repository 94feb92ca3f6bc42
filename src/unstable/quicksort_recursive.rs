//! Recursive quicksort with Lomuto partitioning and the last element as pivot.

use std::cmp::Ordering;

use crate::partition::lomuto_partition;

// Sorted and reverse sorted inputs recurse once per element.
sort_impl!("quicksort_recursive_unstable", 2_048);

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

    let pivot_pos = lomuto_partition(v, 0, len - 1, is_less);

    let (left, right) = v.split_at_mut(pivot_pos);
    quicksort(left, is_less);
    quicksort(&mut right[1..], is_less);
}
