//! The workloads behind the subcommands. Everything here returns plain data, printing is left to
//! `report`.

use anyhow::{ensure, Result};
use serde::Serialize;

use textbook_sort::{
    compare_all_with, is_sorted, Algorithm, ArrayKind, BenchmarkResult, CompareOptions,
    ComparisonSummary, QuickSortVariant,
};

use crate::measure::{self, Sample};

/// The algorithms tracked across input sizes, the quadratic ones would dominate the run time.
pub const SCALABILITY_ALGORITHMS: [Algorithm; 4] = [
    Algorithm::QuickSort(QuickSortVariant::Recursive),
    Algorithm::MergeSort,
    Algorithm::HeapSort,
    Algorithm::Native,
];

#[derive(Debug, Serialize)]
pub struct SortReport {
    pub algorithm: Algorithm,
    pub original: Vec<f64>,
    pub sorted: Vec<f64>,
    pub elapsed_ms: f64,
    pub is_sorted: bool,
    pub input_size: usize,
}

#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub input_size: usize,
    /// `None` for user supplied values.
    pub kind: Option<ArrayKind>,
    pub results: Vec<BenchmarkResult>,
    pub summary: Option<ComparisonSummary>,
}

#[derive(Debug, Serialize)]
pub struct ScalabilityCell {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub sample: Sample,
    pub is_sorted: bool,
}

#[derive(Debug, Serialize)]
pub struct ScalabilityRow {
    pub size: usize,
    pub cells: Vec<ScalabilityCell>,
}

pub fn generate(kind: ArrayKind, len: usize) -> Vec<f64> {
    kind.preset(len).into_iter().map(|val| val as f64).collect()
}

pub fn sort_values(algorithm: Algorithm, values: Vec<f64>) -> SortReport {
    let (sorted, elapsed) = measure::measure_duration(|| algorithm.sort(&values));

    SortReport {
        algorithm,
        is_sorted: is_sorted(&sorted),
        input_size: values.len(),
        elapsed_ms: measure::as_ms(elapsed),
        original: values,
        sorted,
    }
}

pub fn compare(
    values: &[f64],
    kind: Option<ArrayKind>,
    options: &CompareOptions,
) -> ComparisonReport {
    let results = compare_all_with(values, options);
    let summary = ComparisonSummary::from_results(&results);

    ComparisonReport {
        input_size: values.len(),
        kind,
        results,
        summary,
    }
}

/// Runs `compare` on every array kind with `len` elements.
pub fn compare_kinds(len: usize, options: &CompareOptions) -> Vec<ComparisonReport> {
    ArrayKind::ALL
        .into_iter()
        .map(|kind| compare(&generate(kind, len), Some(kind), options))
        .collect()
}

/// Times each scalability algorithm `samples` times per size and keeps the median.
pub fn scalability(
    sizes: &[usize],
    kind: ArrayKind,
    samples: usize,
) -> Result<Vec<ScalabilityRow>> {
    ensure!(samples >= 1, "at least one sample per measurement is needed");

    let mut rows = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let input = generate(kind, size);

        let mut cells = Vec::with_capacity(SCALABILITY_ALGORITHMS.len());
        for algorithm in SCALABILITY_ALGORITHMS {
            let runs = (0..samples)
                .map(|_| algorithm.benchmark(&input))
                .collect::<Vec<_>>();

            let mut durations = runs.iter().map(|run| run.elapsed).collect::<Vec<_>>();
            if let Some(sample) = measure::analyze(&mut durations) {
                cells.push(ScalabilityCell {
                    algorithm,
                    sample,
                    is_sorted: runs.iter().all(|run| run.is_sorted),
                });
            }
        }

        rows.push(ScalabilityRow { size, cells });
    }

    Ok(rows)
}
