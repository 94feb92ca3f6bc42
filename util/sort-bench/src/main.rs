mod benchmark;
mod measure;
mod report;

use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

use textbook_sort::patterns::{preset_seed, set_preset_seed};
use textbook_sort::{parse_sequence, Algorithm, ArrayKind, CompareOptions};

// The recursive quicksort variants recurse once per element on sorted input.
const WORKER_STACK_SIZE: usize = 512 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "sort-bench")]
#[command(about = "Sort, compare and time textbook sorting algorithms")]
struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Seed for generated inputs, picked at random if absent
    #[arg(long, global = true, env = "SORT_BENCH_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort a comma separated list of numbers with one algorithm
    Sort {
        /// One of: recursive, iterative, optimized, 3way, mergesort, heapsort, bubblesort,
        /// insertionsort, native
        #[arg(long, short, default_value = "recursive")]
        algorithm: Algorithm,

        /// Values to sort, for example "3,6,8,10,1,2,1"
        #[arg(value_name = "VALUES", allow_hyphen_values = true)]
        values: String,
    },

    /// Time every algorithm on the same input and rank them
    Compare {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        quadratic: QuadraticArgs,
    },

    /// Time QuickSort, MergeSort, HeapSort and the native sort across input sizes
    Scalability {
        #[arg(
            long,
            value_delimiter = ',',
            default_values_t = [100, 500, 1_000, 5_000, 10_000, 50_000]
        )]
        sizes: Vec<usize>,

        #[arg(long, default_value = "random")]
        kind: ArrayKind,

        /// Runs per measurement, the median is reported
        #[arg(long, default_value_t = 5)]
        samples: usize,
    },

    /// Run compare once for every array kind
    Kinds {
        #[arg(long, default_value_t = 5_000)]
        size: usize,

        #[command(flatten)]
        quadratic: QuadraticArgs,
    },

    /// List complexity and stability of every algorithm
    Info,
}

#[derive(Args)]
struct InputArgs {
    /// Comma separated values, instead of a generated input
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["size", "kind"])]
    values: Option<String>,

    /// Length of the generated input
    #[arg(long, default_value_t = 1_000)]
    size: usize,

    /// random, sorted, reverse, duplicates or nearly
    #[arg(long, default_value = "random")]
    kind: ArrayKind,
}

#[derive(Args)]
struct QuadraticArgs {
    /// Skip BubbleSort and InsertionSort for inputs longer than this
    #[arg(long, default_value_t = 1_000)]
    threshold: usize,

    /// Never skip BubbleSort and InsertionSort
    #[arg(long, conflicts_with = "threshold")]
    all: bool,
}

impl QuadraticArgs {
    fn options(&self) -> CompareOptions {
        CompareOptions {
            quadratic_threshold: (!self.all).then_some(self.threshold),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let worker = thread::Builder::new()
        .name("sort-bench".into())
        .stack_size(WORKER_STACK_SIZE)
        .spawn(move || run(cli))
        .context("failed to spawn the worker thread")?;

    worker
        .join()
        .map_err(|_| anyhow!("the worker thread panicked"))?
}

fn run(cli: Cli) -> Result<()> {
    if let Some(seed) = cli.seed {
        set_preset_seed(seed);
    }

    match cli.command {
        Command::Sort { algorithm, values } => {
            let values = parse_sequence(&values)?;
            let report = benchmark::sort_values(algorithm, values);

            if cli.json {
                report::print_json(&report)?;
            } else {
                report::print_sort(&report);
            }
        }
        Command::Compare { input, quadratic } => {
            let (values, kind) = match input.values {
                Some(text) => (parse_sequence(&text)?, None),
                None => {
                    print_seed(cli.json);
                    (benchmark::generate(input.kind, input.size), Some(input.kind))
                }
            };

            let report = benchmark::compare(&values, kind, &quadratic.options());

            if cli.json {
                report::print_json(&report)?;
            } else {
                report::print_comparison(&report);
            }
        }
        Command::Scalability {
            sizes,
            kind,
            samples,
        } => {
            print_seed(cli.json);
            let rows = benchmark::scalability(&sizes, kind, samples)?;

            if cli.json {
                report::print_json(&rows)?;
            } else {
                println!("\nScalability on {kind} input, median of {samples} runs\n");
                report::print_scalability(&rows);
            }
        }
        Command::Kinds { size, quadratic } => {
            print_seed(cli.json);
            let reports = benchmark::compare_kinds(size, &quadratic.options());

            if cli.json {
                report::print_json(&reports)?;
            } else {
                for report in &reports {
                    report::print_comparison(report);
                }
            }
        }
        Command::Info => {
            let infos = Algorithm::ALL.map(Algorithm::info);

            if cli.json {
                report::print_json(&infos)?;
            } else {
                report::print_info(&infos);
            }
        }
    }

    Ok(())
}

fn print_seed(json: bool) {
    // Always report the seed so a generated input can be reproduced. Kept off stdout for JSON.
    if json {
        eprintln!("Seed: {}", preset_seed());
    } else {
        println!("Seed: {}", preset_seed());
    }
}
