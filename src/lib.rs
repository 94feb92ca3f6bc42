//! Textbook comparison sorts with timing, verification and ranking helpers.
//!
//! Every algorithm lives in its own module under `stable` or `unstable` and implements
//! `sort_test_tools::Sort` through `SortImpl`. The numeric entry points in `algorithm` and
//! `benchmark` work on `T: PartialOrd + Clone` and always hand out a sorted copy.

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_test_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn max_test_len() -> usize {
                $max_test_len
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod algorithm;
pub mod benchmark;
pub mod error;
pub mod input;
pub mod partition;
pub mod patterns;
pub mod stable;
pub mod unstable;
pub mod verify;

pub use algorithm::{sort, Algorithm, AlgorithmInfo};
pub use benchmark::{
    benchmark, compare_all, compare_all_with, BenchmarkResult, CompareOptions, ComparisonSummary,
};
pub use error::SortError;
pub use input::{parse_sequence, validate_sequence};
pub use patterns::ArrayKind;
pub use stable::bubblesort::bubble_sort;
pub use stable::insertionsort::insertion_sort;
pub use stable::mergesort::{merge, merge_sort};
pub use stable::rust_std::native_sort;
pub use unstable::heapsort::{heap_sort, heapify};
pub use unstable::quicksort::{quick_sort, QuickSortVariant};
pub use verify::is_sorted;
