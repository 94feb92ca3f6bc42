//! Sorts that don't preserve the relative order of equal elements.

pub mod heapsort;
pub mod quicksort;
pub mod quicksort_3way;
pub mod quicksort_iterative;
pub mod quicksort_randomized;
pub mod quicksort_recursive;
