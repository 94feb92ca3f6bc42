//! Input shapes for the shared suite and the benches.
//!
//! Values are `i32`, the tests derive wider integers, floats and strings from them. Every call
//! draws from its own `StdRng`, seeded with the process seed and a per thread call counter. Two
//! calls yield different values, while a single test yields the same values again when rerun with
//! the same `OVERRIDE_SEED`.

use std::cell::Cell;
use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen()).collect()
}

pub fn random_range(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    // :.:.:.::
    // Low cardinality when the range is narrow.

    let mut rng = new_rng();
    let dist = Uniform::from(range);

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // :
    // :.
    // ::.. . .
    // Few values dominate, a long tail of rare ones.

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    match ZipfDistribution::new(len, exponent) {
        Ok(dist) => (0..len).map(|_| dist.sample(&mut rng) as i32).collect(),
        Err(()) => panic!("invalid zipf exponent {exponent}"),
    }
}

pub fn few_unique(len: usize, distinct: i32) -> Vec<i32> {
    // :. .:. :.
    // :::::::::
    // What three-way partitioning is meant for.

    random_range(len, 0..=(distinct.max(1) - 1))
}

pub fn nearly_sorted(len: usize, swap_percent: f64) -> Vec<i32> {
    //      .:
    //   .:.::
    // .::::::
    // Best case of insertion sort.

    let mut v = ascending(len);
    if len < 2 {
        return v;
    }

    let mut rng = new_rng();
    let swaps = ((len as f64) * (swap_percent / 100.0)).round() as usize;
    for _ in 0..swaps {
        v.swap(rng.gen_range(0..len), rng.gen_range(0..len));
    }

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![42; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::
    // Worst case of the last element pivot.

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saws(len: usize, saw_count: usize) -> Vec<i32> {
    // :.    .:  :.
    // :::..:::  :::.
    // Runs alternate between ascending and descending.

    let mut v = random(len);
    let run_len = (len / saw_count.max(1)).max(1);

    for (i, run) in v.chunks_mut(run_len).enumerate() {
        if i % 2 == 0 {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let (up, down) = v.split_at_mut(len / 2);
    up.sort_unstable();
    down.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// The seed all patterns derive from. Set `OVERRIDE_SEED` to reproduce a failing run.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed:?}")),
        Err(_) => thread_rng().gen(),
    })
}

// --- Private ---

thread_local! {
    static DRAWS: Cell<u64> = Cell::new(0);
}

fn new_rng() -> StdRng {
    let draw = DRAWS.with(|draws| draws.replace(draws.get() + 1));

    StdRng::seed_from_u64(random_init_seed() ^ draw.wrapping_mul(0x9e37_79b9_7f4a_7c15))
}
