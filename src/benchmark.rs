//! Timing single sort runs and ranking the algorithms against each other.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::algorithm::Algorithm;
use crate::verify::is_sorted;

/// Outcome of one timed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub algorithm: String,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_ms")]
    pub elapsed: Duration,
    pub input_size: usize,
    pub is_sorted: bool,
}

impl BenchmarkResult {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

fn serialize_ms<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Runs `sort_fn` once on a copy of `v` and records how long it took and whether the output is
/// sorted.
///
/// Only the call to `sort_fn` is timed, making the copy and checking the result are not.
pub fn benchmark<T, S>(sort_fn: S, v: &[T], name: &str) -> BenchmarkResult
where
    T: PartialOrd + Clone,
    S: FnOnce(Vec<T>) -> Vec<T>,
{
    let input = v.to_vec();

    let start = Instant::now();
    let sorted = black_box(sort_fn(black_box(input)));
    let elapsed = start.elapsed();

    BenchmarkResult {
        algorithm: name.to_string(),
        elapsed,
        input_size: v.len(),
        is_sorted: is_sorted(&sorted),
    }
}

/// Policy for `compare_all_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Quadratic algorithms are skipped for inputs longer than this. `None` always includes them.
    pub quadratic_threshold: Option<usize>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            quadratic_threshold: Some(1_000),
        }
    }
}

impl CompareOptions {
    pub fn includes(&self, algorithm: Algorithm, len: usize) -> bool {
        match self.quadratic_threshold {
            Some(threshold) if algorithm.is_quadratic() => len <= threshold,
            _ => true,
        }
    }
}

/// Benchmarks every algorithm on `v` with the default options, fastest first.
pub fn compare_all<T>(v: &[T]) -> Vec<BenchmarkResult>
where
    T: PartialOrd + Clone,
{
    compare_all_with(v, &CompareOptions::default())
}

/// Benchmarks every algorithm `options` admits for `v`, one after the other, fastest first.
///
/// Algorithms with equal time keep the order of `Algorithm::ALL`.
pub fn compare_all_with<T>(v: &[T], options: &CompareOptions) -> Vec<BenchmarkResult>
where
    T: PartialOrd + Clone,
{
    let mut results = Algorithm::ALL
        .into_iter()
        .filter(|algorithm| options.includes(*algorithm, v.len()))
        .map(|algorithm| algorithm.benchmark(v))
        .collect::<Vec<_>>();

    results.sort_by_key(|result| result.elapsed);

    results
}

/// Headline numbers of a ranked comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub fastest: String,
    pub slowest: String,
    pub average_ms: f64,
    /// How many times faster the fastest run was than the slowest one. `None` if the fastest run
    /// was too quick for the clock to measure.
    pub speedup: Option<f64>,
}

impl ComparisonSummary {
    /// Summarizes `results` as returned by `compare_all`, `None` if there are none.
    pub fn from_results(results: &[BenchmarkResult]) -> Option<Self> {
        let fastest = results.iter().min_by_key(|result| result.elapsed)?;
        let slowest = results.iter().max_by_key(|result| result.elapsed)?;

        let total_ms: f64 = results.iter().map(BenchmarkResult::elapsed_ms).sum();
        let average_ms = total_ms / results.len() as f64;

        let speedup = if fastest.elapsed.is_zero() {
            None
        } else {
            Some(slowest.elapsed.as_secs_f64() / fastest.elapsed.as_secs_f64())
        };

        Some(Self {
            fastest: fastest.algorithm.clone(),
            slowest: slowest.algorithm.clone(),
            average_ms,
            speedup,
        })
    }
}
