//! Baseline backed by the standard library's stable sort.

use std::cmp::Ordering;

sort_impl!("rust_std_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    v.sort();
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.sort_by(compare);
}

/// Returns a sorted copy of `v`, leaving `v` untouched.
pub fn native_sort<T>(v: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    let mut arr = v.to_vec();
    native_sort_by(&mut arr, &mut |a, b| a < b);

    arr
}

pub fn native_sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    v.sort_by(|a, b| {
        if is_less(a, b) {
            Ordering::Less
        } else if is_less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}
