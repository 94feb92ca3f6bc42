use std::env;
use std::fmt;
use std::str::FromStr;

use rand::prelude::*;

use once_cell::sync::OnceCell;

use serde::Serialize;

use crate::error::SortError;

// --- Public ---

/// Input presets for comparing the algorithms against each other.
///
/// Each one is aimed at a known weak or strong spot. `Sorted` and `Reverse` are the worst case of
/// the last-element pivot quicksorts. `Duplicates` is where three-way partitioning shines, and
/// `NearlySorted` is the best case of insertion sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayKind {
    Random,
    Sorted,
    Reverse,
    Duplicates,
    #[serde(rename = "nearly")]
    NearlySorted,
}

impl ArrayKind {
    pub const ALL: [ArrayKind; 5] = [
        ArrayKind::Random,
        ArrayKind::Sorted,
        ArrayKind::Reverse,
        ArrayKind::Duplicates,
        ArrayKind::NearlySorted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
            Self::Duplicates => "duplicates",
            Self::NearlySorted => "nearly",
        }
    }

    /// Generates `len` values of this kind drawing randomness from `rng`.
    pub fn generate<R>(self, len: usize, rng: &mut R) -> Vec<i64>
    where
        R: Rng + ?Sized,
    {
        match self {
            // :.:.:.::
            Self::Random => (0..len).map(|_| rng.gen_range(0..=10_000)).collect(),
            //     .:
            //   .:::
            // .:::::
            Self::Sorted => (0..len as i64).collect(),
            // :.
            // :::.
            // :::::.
            Self::Reverse => (1..=len as i64).rev().collect(),
            // ::::::::
            Self::Duplicates => (0..len).map(|_| rng.gen_range(0..10)).collect(),
            //      .:
            //   .:.::
            // .::::::
            Self::NearlySorted => {
                let mut v = (1..=len as i64).collect::<Vec<_>>();
                if len == 0 {
                    return v;
                }

                for _ in 0..(len / 10) {
                    let a = rng.gen_range(0..len);
                    let b = rng.gen_range(0..len);
                    v.swap(a, b);
                }

                v
            }
        }
    }

    /// Generates `len` values from a generator seeded with `preset_seed`.
    ///
    /// Repeated calls with the same kind and length yield the same values within a process.
    pub fn preset(self, len: usize) -> Vec<i64> {
        self.generate(len, &mut preset_rng())
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArrayKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim().to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|candidate| candidate.name() == kind)
            .ok_or_else(|| {
                let supported = Self::ALL.map(|kind| kind.name()).join(", ");
                SortError::InvalidInput(format!(
                    "unknown array kind '{s}', expected one of: {supported}"
                ))
            })
    }
}

/// Fixes the seed used by `preset_seed`. Returns `false` if a seed was already in use.
pub fn set_preset_seed(seed: u64) -> bool {
    PRESET_SEED.set(seed).is_ok()
}

/// The seed all presets of this process derive from.
///
/// Taken from the `SORT_BENCH_SEED` environment variable if it holds a valid `u64`, otherwise
/// picked at random once per process.
pub fn preset_seed() -> u64 {
    *PRESET_SEED.get_or_init(|| {
        env::var("SORT_BENCH_SEED")
            .ok()
            .and_then(|seed| u64::from_str(seed.trim()).ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

pub fn preset_rng() -> StdRng {
    StdRng::seed_from_u64(preset_seed())
}

// --- Private ---

static PRESET_SEED: OnceCell<u64> = OnceCell::new();
