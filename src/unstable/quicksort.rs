//! Single entry point over the quicksort variants.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SortError;
use crate::unstable::{
    quicksort_3way, quicksort_iterative, quicksort_randomized, quicksort_recursive,
};

/// The partition and recursion strategy used by `quick_sort`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickSortVariant {
    #[default]
    Recursive,
    Iterative,
    /// Random pivot, accepted as `optimized` for compatibility with older front ends.
    Randomized,
    #[serde(rename = "3way")]
    ThreeWay,
}

impl QuickSortVariant {
    pub const ALL: [QuickSortVariant; 4] = [
        QuickSortVariant::Recursive,
        QuickSortVariant::Iterative,
        QuickSortVariant::Randomized,
        QuickSortVariant::ThreeWay,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Iterative => "iterative",
            Self::Randomized => "optimized",
            Self::ThreeWay => "3way",
        }
    }

    /// Sorts `v` in place with this variant.
    pub fn sort_by<T, F>(self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Self::Recursive => quicksort_recursive::quicksort(v, is_less),
            Self::Iterative => quicksort_iterative::quicksort(v, is_less),
            Self::Randomized => quicksort_randomized::quicksort(v, is_less),
            Self::ThreeWay => quicksort_3way::quicksort(v, is_less),
        }
    }
}

impl fmt::Display for QuickSortVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for QuickSortVariant {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Self::Recursive),
            "iterative" => Ok(Self::Iterative),
            "optimized" | "randomized" => Ok(Self::Randomized),
            "3way" | "three_way" => Ok(Self::ThreeWay),
            _ => Err(SortError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Returns a sorted copy of `v`, the input is never modified.
pub fn quick_sort<T>(v: &[T], variant: QuickSortVariant) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    let mut arr = v.to_vec();
    variant.sort_by(&mut arr, &mut |a, b| a < b);

    arr
}
