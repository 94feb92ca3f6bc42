//! Top-down merge sort returning a new sorted vector.

use std::cmp::Ordering;

sort_impl!("mergesort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    sort_in_place(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_in_place(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Returns a sorted copy of `v`, leaving `v` untouched.
pub fn merge_sort<T>(v: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    merge_sort_by(v, &mut |a, b| a < b)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn sort_in_place<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    // If `is_less` panics `v` is left as it was, the sorted elements only exist in the copy.
    let sorted = merge_sort_by(v, is_less);
    v.clone_from_slice(&sorted);
}

pub fn merge_sort_by<T, F>(v: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return v.to_vec();
    }

    let mid = v.len() / 2;
    let left = merge_sort_by(&v[..mid], is_less);
    let right = merge_sort_by(&v[mid..], is_less);

    merge(left, right, is_less)
}

/// Merges two sorted vectors into one.
///
/// On ties the element from `left` is taken first, which is what makes the sort stable.
pub fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    // At most one of them still has elements.
    merged.extend(left);
    merged.extend(right);

    merged
}
