//! Human readable tables and JSON output for the subcommands.

use anyhow::Result;
use serde::Serialize;

use textbook_sort::AlgorithmInfo;

use crate::benchmark::{ComparisonReport, ScalabilityRow, SortReport, SCALABILITY_ALGORITHMS};
use crate::measure;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

pub fn print_sort(report: &SortReport) {
    println!("Algorithm: {}", report.algorithm);
    println!("Original:  {}", join_values(&report.original));
    println!("Sorted:    {}", join_values(&report.sorted));
    println!(
        "Time:      {:.4} ms for {} elements",
        report.elapsed_ms, report.input_size
    );
    println!("Verified:  {}", verdict(report.is_sorted));
}

pub fn print_comparison(report: &ComparisonReport) {
    match report.kind {
        Some(kind) => println!("\nInput: {} elements ({kind})", report.input_size),
        None => println!("\nInput: {} elements", report.input_size),
    }

    println!("{}", "-".repeat(60));
    println!(
        "{:<6} | {:<24} | {:>12} | {}",
        "Rank", "Algorithm", "Time (ms)", "Sorted"
    );
    println!("{}", "-".repeat(60));

    for (rank, result) in report.results.iter().enumerate() {
        println!(
            "{:<6} | {:<24} | {:>12.4} | {}",
            rank + 1,
            result.algorithm,
            result.elapsed_ms(),
            verdict(result.is_sorted)
        );
    }

    println!("{}", "-".repeat(60));

    if let Some(summary) = &report.summary {
        println!("Fastest: {}", summary.fastest);
        println!("Slowest: {}", summary.slowest);
        println!("Average: {:.4} ms", summary.average_ms);
        match summary.speedup {
            Some(speedup) => println!("Speedup: {speedup:.2}x"),
            None => println!("Speedup: n/a"),
        }
    }
}

pub fn print_scalability(rows: &[ScalabilityRow]) {
    let mut header = format!("{:<10}", "Size");
    for algorithm in SCALABILITY_ALGORITHMS {
        header.push_str(&format!(" | {:>24}", algorithm.name()));
    }

    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for row in rows {
        let mut line = format!("{:<10}", row.size);
        for cell in &row.cells {
            let mut value = format!("{:.4}ms", measure::as_ms(cell.sample.median));
            if !cell.is_sorted {
                value.push_str(" !");
            }
            line.push_str(&format!(" | {value:>24}"));
        }

        println!("{line}");
    }
}

pub fn print_info(infos: &[AlgorithmInfo]) {
    for info in infos {
        println!("{} ({})", info.name, info.id);
        println!(
            "  time: best {}, average {}, worst {}",
            info.best, info.average, info.worst
        );
        println!(
            "  space: {}, stable: {}, in place: {}",
            info.space, info.stable, info.in_place
        );
        println!("  {}", info.description);
    }
}

fn verdict(is_sorted: bool) -> &'static str {
    if is_sorted {
        "yes"
    } else {
        "NO"
    }
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
