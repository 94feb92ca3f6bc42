use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use textbook_sort::{
    benchmark, compare_all, compare_all_with, Algorithm, ArrayKind, BenchmarkResult,
    CompareOptions, ComparisonSummary,
};

fn random_input(len: usize) -> Vec<i64> {
    ArrayKind::Random.generate(len, &mut StdRng::seed_from_u64(len as u64))
}

fn result(algorithm: &str, elapsed_ms: u64) -> BenchmarkResult {
    BenchmarkResult {
        algorithm: algorithm.to_string(),
        elapsed: Duration::from_millis(elapsed_ms),
        input_size: 10,
        is_sorted: true,
    }
}

#[test]
fn benchmark_times_the_sort_fn() {
    let input = [4, 1, 3];

    let result = benchmark(
        |mut v| {
            v.sort();
            v
        },
        &input,
        "std",
    );
    assert_eq!(result.algorithm, "std");
    assert_eq!(result.input_size, 3);
    assert!(result.is_sorted);

    // A broken sort is reported, not hidden.
    let result = benchmark(|v| v, &input, "identity");
    assert!(!result.is_sorted);
}

#[test]
fn compare_ranks_fastest_first() {
    let input = random_input(500);
    let results = compare_all(&input);

    assert_eq!(results.len(), Algorithm::ALL.len());
    assert!(results.windows(2).all(|w| w[0].elapsed <= w[1].elapsed));
    assert!(results.iter().all(|result| result.is_sorted));
    assert!(results.iter().all(|result| result.input_size == 500));
}

#[test]
fn compare_skips_quadratic_above_threshold() {
    let input = random_input(1_001);
    let results = compare_all(&input);

    assert_eq!(results.len(), Algorithm::ALL.len() - 2);
    for quadratic in [Algorithm::BubbleSort, Algorithm::InsertionSort] {
        assert!(results.iter().all(|result| result.algorithm != quadratic.name()));
    }

    // Exactly at the threshold they still run.
    let results = compare_all(&random_input(1_000));
    assert_eq!(results.len(), Algorithm::ALL.len());
}

#[test]
fn compare_threshold_is_configurable() {
    let input = random_input(1_200);

    let all = compare_all_with(
        &input,
        &CompareOptions {
            quadratic_threshold: None,
        },
    );
    assert_eq!(all.len(), Algorithm::ALL.len());

    let strict = compare_all_with(
        &random_input(50),
        &CompareOptions {
            quadratic_threshold: Some(10),
        },
    );
    assert_eq!(strict.len(), Algorithm::ALL.len() - 2);
}

#[test]
fn summary() {
    let results = [result("a", 2), result("b", 5), result("c", 8)];
    let summary = ComparisonSummary::from_results(&results).unwrap();

    assert_eq!(summary.fastest, "a");
    assert_eq!(summary.slowest, "c");
    assert!((summary.average_ms - 5.0).abs() < 1e-9);
    assert!((summary.speedup.unwrap() - 4.0).abs() < 1e-9);
}

#[test]
fn summary_edges() {
    assert!(ComparisonSummary::from_results(&[]).is_none());

    let summary = ComparisonSummary::from_results(&[result("a", 0), result("b", 3)]).unwrap();
    assert_eq!(summary.speedup, None);
}

#[test]
fn result_json() {
    let json = serde_json::to_value(result("MergeSort", 12)).unwrap();

    assert_eq!(json["algorithm"], "MergeSort");
    assert!((json["elapsed_ms"].as_f64().unwrap() - 12.0).abs() < 1e-9);
    assert_eq!(json["input_size"], 10);
    assert_eq!(json["is_sorted"], true);
}

#[test]
fn algorithm_info() {
    let merge = Algorithm::MergeSort.info();
    assert!(merge.stable);
    assert!(!merge.in_place);
    assert_eq!(merge.space, "O(n)");

    let heap = Algorithm::HeapSort.info();
    assert!(!heap.stable);
    assert_eq!(heap.worst, "O(n log n)");

    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        assert_eq!(info.id, algorithm.id());
        let stable = matches!(
            algorithm,
            Algorithm::MergeSort
                | Algorithm::BubbleSort
                | Algorithm::InsertionSort
                | Algorithm::Native
        );
        assert_eq!(info.stable, stable, "{algorithm}");
    }
}
