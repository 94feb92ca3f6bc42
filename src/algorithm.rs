//! The closed set of algorithms, addressable by identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::benchmark::{self, BenchmarkResult};
use crate::error::SortError;
use crate::stable::{bubblesort, insertionsort, mergesort, rust_std};
use crate::unstable::heapsort;
use crate::unstable::quicksort::QuickSortVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    QuickSort(QuickSortVariant),
    MergeSort,
    HeapSort,
    BubbleSort,
    InsertionSort,
    Native,
}

/// Complexity and stability of an algorithm, as listed by `sort-bench info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    pub stable: bool,
    pub in_place: bool,
    pub description: &'static str,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::QuickSort(QuickSortVariant::Recursive),
        Algorithm::QuickSort(QuickSortVariant::Iterative),
        Algorithm::QuickSort(QuickSortVariant::Randomized),
        Algorithm::QuickSort(QuickSortVariant::ThreeWay),
        Algorithm::MergeSort,
        Algorithm::HeapSort,
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::Native,
    ];

    /// The identifier accepted by `from_str`.
    pub fn id(self) -> &'static str {
        match self {
            Self::QuickSort(variant) => variant.id(),
            Self::MergeSort => "mergesort",
            Self::HeapSort => "heapsort",
            Self::BubbleSort => "bubblesort",
            Self::InsertionSort => "insertionsort",
            Self::Native => "native",
        }
    }

    /// Human readable name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::QuickSort(QuickSortVariant::Recursive) => "QuickSort (Recursive)",
            Self::QuickSort(QuickSortVariant::Iterative) => "QuickSort (Iterative)",
            Self::QuickSort(QuickSortVariant::Randomized) => "QuickSort (Optimized)",
            Self::QuickSort(QuickSortVariant::ThreeWay) => "QuickSort (3-Way)",
            Self::MergeSort => "MergeSort",
            Self::HeapSort => "HeapSort",
            Self::BubbleSort => "BubbleSort",
            Self::InsertionSort => "InsertionSort",
            Self::Native => "Native Sort",
        }
    }

    /// BubbleSort and InsertionSort, left out of comparisons on large inputs.
    pub fn is_quadratic(self) -> bool {
        matches!(self, Self::BubbleSort | Self::InsertionSort)
    }

    /// Whether the underlying routine rearranges its input buffer rather than building a new one.
    ///
    /// `Algorithm::sort` always hands out a new vector, this describes the routine behind it.
    pub fn is_in_place(self) -> bool {
        !matches!(self, Self::MergeSort | Self::Native)
    }

    pub fn info(self) -> AlgorithmInfo {
        let (best, average, worst, space, stable, description) = match self {
            Self::QuickSort(QuickSortVariant::ThreeWay) => (
                "O(n)",
                "O(n log n)",
                "O(n²)",
                "O(log n)",
                false,
                "Groups elements equal to the pivot, linear when all elements are equal.",
            ),
            Self::QuickSort(QuickSortVariant::Randomized) => (
                "O(n log n)",
                "O(n log n)",
                "O(n²)",
                "O(log n)",
                false,
                "Random pivot makes the quadratic case unlikely on sorted input.",
            ),
            Self::QuickSort(_) => (
                "O(n log n)",
                "O(n log n)",
                "O(n²)",
                "O(log n)",
                false,
                "Efficient divide-and-conquer algorithm. Fast in practice but can degrade to O(n²).",
            ),
            Self::MergeSort => (
                "O(n log n)",
                "O(n log n)",
                "O(n log n)",
                "O(n)",
                true,
                "Consistent O(n log n) performance but requires additional space.",
            ),
            Self::HeapSort => (
                "O(n log n)",
                "O(n log n)",
                "O(n log n)",
                "O(1)",
                false,
                "Consistent performance with in-place sorting. Not stable.",
            ),
            Self::BubbleSort => (
                "O(n)",
                "O(n²)",
                "O(n²)",
                "O(1)",
                true,
                "Simple but inefficient for large datasets. Good for educational purposes.",
            ),
            Self::InsertionSort => (
                "O(n)",
                "O(n²)",
                "O(n²)",
                "O(1)",
                true,
                "Efficient for small datasets and nearly sorted arrays.",
            ),
            Self::Native => (
                "O(n)",
                "O(n log n)",
                "O(n log n)",
                "O(n)",
                true,
                "The standard library's stable sort, adaptive to existing runs.",
            ),
        };

        AlgorithmInfo {
            id: self.id(),
            name: self.name(),
            best,
            average,
            worst,
            space,
            stable,
            in_place: self.is_in_place(),
            description,
        }
    }

    /// Returns a sorted copy of `v`. The input is never modified.
    pub fn sort<T>(self, v: &[T]) -> Vec<T>
    where
        T: PartialOrd + Clone,
    {
        self.sort_owned(v.to_vec())
    }

    /// Sorts an owned vector, reusing its buffer for the in-place algorithms.
    pub fn sort_owned<T>(self, mut v: Vec<T>) -> Vec<T>
    where
        T: PartialOrd + Clone,
    {
        let is_less = &mut |a: &T, b: &T| a < b;

        match self {
            Self::QuickSort(variant) => variant.sort_by(&mut v, is_less),
            Self::MergeSort => return mergesort::merge_sort_by(&v, is_less),
            Self::HeapSort => heapsort::heapsort(&mut v, is_less),
            Self::BubbleSort => bubblesort::bubble_sort_by(&mut v, is_less),
            Self::InsertionSort => insertionsort::insertion_sort_by(&mut v, is_less),
            Self::Native => rust_std::native_sort_by(&mut v, is_less),
        }

        v
    }

    /// Times a single run of this algorithm on a copy of `v`.
    pub fn benchmark<T>(self, v: &[T]) -> BenchmarkResult
    where
        T: PartialOrd + Clone,
    {
        benchmark::benchmark(|input| self.sort_owned(input), v, self.name())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts the identifiers listed in `Algorithm::ALL`, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == id)
            .ok_or_else(|| SortError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Sorts a copy of `v` with the algorithm named by `algorithm_id`.
pub fn sort<T>(v: &[T], algorithm_id: &str) -> Result<Vec<T>, SortError>
where
    T: PartialOrd + Clone,
{
    let algorithm = Algorithm::from_str(algorithm_id)?;

    Ok(algorithm.sort(v))
}
