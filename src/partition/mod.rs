//! Partition schemes shared by the quicksort variants.
//!
//! All functions work on the inclusive range `low..=high` of `v` and require
//! `low <= high < v.len()`.

use rand::Rng;

/// Lomuto partition with the pivot taken from `v[high]`.
///
/// Returns the final index `p` of the pivot. Afterwards every element in `low..p` is not greater
/// than the pivot and every element in `p + 1..=high` is not less than the pivot.
pub fn lomuto_partition<T, F>(v: &mut [T], low: usize, high: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(low <= high && high < v.len());

    // `v[low..store]` holds the elements found to be less than the pivot. The pivot itself stays
    // at `high` until the scan is done, so comparing against it in place is fine.
    let mut store = low;
    for j in low..high {
        if is_less(&v[j], &v[high]) {
            v.swap(store, j);
            store += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(store, high);

    store
}

/// Lomuto partition around a pivot chosen uniformly at random from `low..=high`.
pub fn randomized_partition<T, F, R>(
    v: &mut [T],
    low: usize,
    high: usize,
    rng: &mut R,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    let pivot_pos = rng.gen_range(low..=high);
    v.swap(pivot_pos, high);

    lomuto_partition(v, low, high, is_less)
}

/// Dutch national flag partition with the pivot taken from `v[low]`.
///
/// Returns `(lt, gt)` such that `v[low..lt]` is less than the pivot, `v[lt..=gt]` is equal to it
/// and `v[gt + 1..=high]` is greater.
pub fn three_way_partition<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(low <= high && high < v.len());

    let mut lt = low;
    let mut i = low + 1;
    let mut gt = high;

    // `lt < i` holds throughout and `v[lt]` is always an element equal to the pivot, so it serves
    // as the pivot reference without having to copy the pivot out.
    while i <= gt {
        if is_less(&v[i], &v[lt]) {
            v.swap(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(&v[lt], &v[i]) {
            v.swap(i, gt);
            // i >= 1 so gt can't underflow.
            gt -= 1;
        } else {
            i += 1;
        }
    }

    (lt, gt)
}
