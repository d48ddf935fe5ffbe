//! The benchmark suite runner
//!
//! The runner executes the suite benchmarks in one process: it parses the command-line arguments,
//! selects the benchmarks to run, measures the wall-clock time of each workload and finally prints
//! (and optionally saves) the summary of the whole run.

pub mod args;
pub mod bench;
pub mod format;
pub mod summary;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::debug;

use self::args::CommandLineArgs;
use self::bench::{Benchmark, BENCHMARKS};
use self::format::OutputFormatKind;
use self::summary::{BenchmarkSummaries, BenchmarkSummary};

/// The environment variables recognized by the suite runner
pub mod envs {
    /// Cargo's terminal color setting, respected if [`MICROBENCH_COLOR`] is unset
    pub const CARGO_TERM_COLOR: &str = "CARGO_TERM_COLOR";

    /// Overrides the automatic color detection of the terminal output (`always` or `never`)
    pub const MICROBENCH_COLOR: &str = "MICROBENCH_COLOR";
    /// The log level filter of the suite runner
    pub const MICROBENCH_LOG: &str = "MICROBENCH_LOG";
}

/// Run a single [`Benchmark`] and record its result
///
/// The clock only measures the workload. The result is printed after the measurement, so the
/// terminal output never contributes to the elapsed time.
fn run_benchmark(benchmark: &Benchmark, output_format_kind: OutputFormatKind) -> BenchmarkSummary {
    debug!("Running benchmark '{}'", benchmark.name);

    let start = Instant::now();
    let output = (benchmark.run)();
    let elapsed = start.elapsed();

    let summary = BenchmarkSummary::new(benchmark.name, &output, elapsed);
    if output_format_kind == OutputFormatKind::Default {
        format::print_benchmark(&summary, benchmark.description);
    }

    summary
}

/// The main entry point of the suite runner
///
/// Errors are returned to the binary which prints them via the log interface and exits non-zero.
pub fn run() -> Result<()> {
    let args = CommandLineArgs::parse();

    if args.list {
        for benchmark in BENCHMARKS {
            format::print_list_benchmark(benchmark.name);
        }
        format::print_benchmark_list_summary(BENCHMARKS.len());
        return Ok(());
    }

    let start = Instant::now();
    let mut summaries = BenchmarkSummaries::default();
    for benchmark in BENCHMARKS {
        if let Some(filter) = &args.filter {
            if !benchmark.name.contains(filter.as_str()) {
                debug!("Skipping benchmark '{}': Filtered out", benchmark.name);
                summaries.num_filtered += 1;
                continue;
            }
        }

        summaries.add_summary(run_benchmark(benchmark, args.output_format));
    }
    summaries.elapsed(start);

    if let Some(path) = &args.save_summary {
        summaries.save_json(path, args.output_format == OutputFormatKind::PrettyJson)?;
        debug!("Saved summary file: '{}'", path.display());
    }

    summaries.print(args.nosummary, args.output_format);
    Ok(())
}
