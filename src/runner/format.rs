//! The format of the suite runner terminal output
//!
//! All direct print statements should be part of this module and there should be no `println!` or
//! similar statement in any other module of the runner.

use std::fmt::Display;
use std::time::Duration;

use colored::Colorize;

use super::summary::{BenchmarkSummaries, BenchmarkSummary};

/// The kind of the output format can be either json or the default terminal output
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormatKind {
    /// The default terminal output
    #[default]
    Default,
    /// Json terminal output
    Json,
    /// Pretty json terminal output
    PrettyJson,
}

/// The first line of a benchmark run
///
/// For example `bubble: bubble sort a fixed sequence of 12 integers`
pub struct Header {
    name: String,
    description: String,
}

/// The formatter of the final summary of a suite run
pub struct SummaryFormatter {
    output_format_kind: OutputFormatKind,
}

impl Header {
    /// Create a new `Header`
    pub fn new<T, U>(name: T, description: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Print the header line
    pub fn print(&self) {
        println!("{self}");
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}: {}",
            self.name.green().bold(),
            self.description.cyan()
        ))
    }
}

impl SummaryFormatter {
    /// Create a new `SummaryFormatter`
    pub fn new(output_format_kind: OutputFormatKind) -> Self {
        Self { output_format_kind }
    }

    /// Print the summary of a whole suite run
    ///
    /// The default format prints a single result line. The json formats print the
    /// [`BenchmarkSummaries`] as one json document instead.
    pub fn print(&self, summaries: &BenchmarkSummaries) {
        match self.output_format_kind {
            OutputFormatKind::Default => {
                let total_benchmarks = summaries.num_benchmarks();
                let total_time = summaries
                    .total_time
                    .expect("The total execution time should be present")
                    .as_secs_f64();

                if summaries.num_filtered > 0 {
                    println!(
                        "Microbench result: {}. {total_benchmarks} benchmarks finished in \
                         {total_time:.6}s; {} filtered out",
                        "Ok".green().bold(),
                        summaries.num_filtered
                    );
                } else {
                    println!(
                        "Microbench result: {}. {total_benchmarks} benchmarks finished in \
                         {total_time:.6}s",
                        "Ok".green().bold(),
                    );
                }
            }
            OutputFormatKind::Json => println!(
                "{}",
                serde_json::to_string(summaries).expect("The summaries should serialize to json")
            ),
            OutputFormatKind::PrettyJson => println!(
                "{}",
                serde_json::to_string_pretty(summaries)
                    .expect("The summaries should serialize to json")
            ),
        }
    }
}

/// Format the elapsed wall-clock time of a workload as the `elapsed:` output line
///
/// The time is formatted as seconds with a fixed six fractional digits, for example
/// `elapsed: 0.000417`.
pub fn elapsed_line(elapsed: Duration) -> String {
    format!("elapsed: {:.6}", elapsed.as_secs_f64())
}

/// Print a single benchmark run: the header, the workload output and the elapsed line
pub fn print_benchmark(summary: &BenchmarkSummary, description: &str) {
    Header::new(summary.name.as_str(), description).print();
    println!("{}", summary.output);
    println!("{}", elapsed_line(summary.elapsed));
    println!();
}

/// Print the summary of the --list argument
pub fn print_benchmark_list_summary(sum: usize) {
    if sum != 0 {
        println!();
    }
    println!("0 tests, {sum} benchmarks");
}

/// Print a single benchmark for the --list argument
pub fn print_list_benchmark(name: &str) {
    println!("{name}: benchmark");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::zero(Duration::ZERO, "elapsed: 0.000000")]
    #[case::micros(Duration::from_micros(12), "elapsed: 0.000012")]
    #[case::millis(Duration::from_millis(1500), "elapsed: 1.500000")]
    #[case::rounded(Duration::from_nanos(123_456_789), "elapsed: 0.123457")]
    fn test_elapsed_line(#[case] elapsed: Duration, #[case] expected: &str) {
        assert_eq!(elapsed_line(elapsed), expected);
    }

    #[test]
    fn test_output_format_kind_default() {
        assert_eq!(OutputFormatKind::default(), OutputFormatKind::Default);
    }
}
