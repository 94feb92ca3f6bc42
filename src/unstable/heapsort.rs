//! Heapsort on a binary max-heap with a recursive heapify.

use std::cmp::Ordering;

sort_impl!("heapsort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Returns a sorted copy of `v`, leaving `v` untouched.
pub fn heap_sort<T>(v: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    let mut arr = v.to_vec();
    heapsort(&mut arr, &mut |a, b| a < b);

    arr
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Sorts `v` in place, `O(n * log(n))` in all cases.
pub fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Build the heap bottom up, starting at the last node that has children.
    for i in (0..len / 2).rev() {
        heapify(v, len, i, is_less);
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        v.swap(0, i);
        heapify(v, i, 0, is_less);
    }
}

/// Restores the max-heap property for the subtree rooted at `root`, considering only
/// `v[..heap_size]`.
///
/// Both child subtrees of `root` must already be valid heaps.
pub fn heapify<T, F>(v: &mut [T], heap_size: usize, root: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    let mut largest = root;

    if left < heap_size && is_less(&v[largest], &v[left]) {
        largest = left;
    }

    if right < heap_size && is_less(&v[largest], &v[right]) {
        largest = right;
    }

    if largest != root {
        v.swap(root, largest);
        heapify(v, heap_size, largest, is_less);
    }
}
