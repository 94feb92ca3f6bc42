//! Quicksort with three-way (Dutch national flag) partitioning.
//!
//! Elements equal to the pivot are gathered in the middle and never looked at again, which makes
//! inputs with few distinct values linear instead of quadratic.

use std::cmp::Ordering;

use crate::partition::three_way_partition;

// First element as pivot, sorted inputs still recurse once per element.
sort_impl!("quicksort_3way_unstable", 2_048);

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

    let (lt, gt) = three_way_partition(v, 0, len - 1, is_less);

    let (left, rest) = v.split_at_mut(lt);
    quicksort(left, is_less);
    quicksort(&mut rest[(gt - lt + 1)..], is_less);
}
