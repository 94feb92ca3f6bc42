use std::cmp::Ordering;

// Quadratic.
sort_impl!("bubblesort_stable", 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort_by(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort_by(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` in place.
pub fn bubble_sort<T: PartialOrd>(v: &mut [T]) {
    bubble_sort_by(v, &mut |a, b| a < b);
}

pub fn bubble_sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        let mut swapped = false;

        // After pass `i` the last `i + 1` elements are in their final position.
        for j in 0..(len - i - 1) {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
