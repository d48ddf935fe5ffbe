//! The summary of a benchmark suite run

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::format::{OutputFormatKind, SummaryFormatter};
use crate::error::Error;

/// The `BenchmarkSummary` containing all information of a single benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    /// The name of the benchmark
    pub name: String,
    /// The observable result of the workload as it is printed to the terminal
    pub output: String,
    /// The wall-clock execution time of the workload
    #[serde(with = "crate::serde::duration_secs")]
    pub elapsed: Duration,
}

/// Contains the benchmark summaries of a whole suite run and the total execution time
///
/// Used to print the final summary after all benchmarks and to save the json summary file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkSummaries {
    /// The amount of benchmarks which were filtered out by the command-line filter
    pub num_filtered: usize,
    /// The summaries of the executed benchmarks
    pub summaries: Vec<BenchmarkSummary>,
    /// The execution time of the whole suite run
    #[serde(with = "crate::serde::option_duration_secs")]
    pub total_time: Option<Duration>,
}

impl BenchmarkSummary {
    /// Create a new `BenchmarkSummary`
    pub fn new(name: &str, output: &str, elapsed: Duration) -> Self {
        Self {
            name: name.to_owned(),
            output: output.to_owned(),
            elapsed,
        }
    }
}

impl BenchmarkSummaries {
    /// Add a [`BenchmarkSummary`]
    pub fn add_summary(&mut self, summary: BenchmarkSummary) {
        self.summaries.push(summary);
    }

    /// Set the total execution time from `start` to now
    pub fn elapsed(&mut self, start: Instant) {
        self.total_time = Some(start.elapsed());
    }

    /// Return the number of executed benchmarks
    pub fn num_benchmarks(&self) -> usize {
        self.summaries.len()
    }

    /// Print the summary if not prevented by command-line arguments
    pub fn print(&self, nosummary: bool, output_format_kind: OutputFormatKind) {
        if !nosummary {
            SummaryFormatter::new(output_format_kind).print(self);
        }
    }

    /// Save this `BenchmarkSummaries` in json format to `path`
    pub fn save_json(&self, path: &Path, pretty: bool) -> Result<()> {
        let file = File::create(path)
            .map_err(|error| Error::SummaryError(path.to_owned(), error.to_string()))?;

        if pretty {
            serde_json::to_writer_pretty(file, self)
        } else {
            serde_json::to_writer(file, self)
        }
        .map_err(|error| Error::SerializationError(error.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn summary_fixture(name: &str) -> BenchmarkSummary {
        BenchmarkSummary::new(name, "true", Duration::from_micros(42))
    }

    #[test]
    fn test_add_summary() {
        let mut summaries = BenchmarkSummaries::default();
        assert_eq!(summaries.num_benchmarks(), 0);

        summaries.add_summary(summary_fixture("toggle"));

        assert_eq!(summaries.num_benchmarks(), 1);
        assert_eq!(summaries.summaries[0].name, "toggle");
    }

    #[test]
    fn test_elapsed_sets_the_total_time() {
        let mut summaries = BenchmarkSummaries::default();
        assert_eq!(summaries.total_time, None);

        summaries.elapsed(Instant::now());

        assert!(summaries.total_time.is_some());
    }

    #[test]
    fn test_save_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        let mut summaries = BenchmarkSummaries::default();
        summaries.add_summary(summary_fixture("toggle"));
        summaries.num_filtered = 2;
        summaries.elapsed(Instant::now());

        summaries.save_json(&path, false).unwrap();

        let saved: BenchmarkSummaries =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(saved.num_filtered, 2);
        assert_eq!(saved.summaries, summaries.summaries);
        assert!(saved.total_time.is_some());
    }

    #[test]
    fn test_save_json_to_an_invalid_path_is_an_error() {
        let summaries = BenchmarkSummaries::default();

        let result = summaries.save_json(Path::new("/nonexistent/summary.json"), false);

        assert!(result.is_err());
    }
}
