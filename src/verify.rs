use std::cmp::Ordering;

/// Returns `true` if no element of `v` is greater than its successor.
///
/// Empty and single element sequences are sorted.
pub fn is_sorted<T: PartialOrd>(v: &[T]) -> bool {
    v.windows(2)
        .all(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Greater))
}
