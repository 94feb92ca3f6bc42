use std::cmp::Ordering;

// Quadratic.
sort_impl!("insertionsort_stable", 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort_by(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort_by(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` in place. Linear on already sorted input.
pub fn insertion_sort<T: PartialOrd>(v: &mut [T]) {
    insertion_sort_by(v, &mut |a, b| a < b);
}

pub fn insertion_sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Shift `v[i]` to the left until its predecessor is not greater. The element travels by
        // adjacent swaps, which keeps `v` a permutation of the input even if `is_less` panics.
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
