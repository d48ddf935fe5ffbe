//! The command line arguments of the suite runner

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::format::OutputFormatKind;

/// The command line arguments of the `microbench` binary
///
/// Every argument can also be set through a `MICROBENCH_*` environment variable. Command-line
/// values take precedence over the environment.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Wall-clock micro-benchmark suite",
    long_about = None
)]
pub struct CommandLineArgs {
    /// Run only the benchmarks whose name contains FILTER
    #[arg(value_name = "FILTER", env = "MICROBENCH_FILTER")]
    pub filter: Option<String>,

    /// List all benchmarks of the suite instead of running them
    #[arg(long = "list", action = ArgAction::SetTrue, env = "MICROBENCH_LIST")]
    pub list: bool,

    /// Suppress the summary showing the total execution time
    #[arg(long = "nosummary", action = ArgAction::SetTrue, env = "MICROBENCH_NOSUMMARY")]
    pub nosummary: bool,

    /// The terminal output format
    #[arg(
        long = "output-format",
        value_enum,
        default_value_t = OutputFormatKind::default(),
        value_name = "FORMAT",
        env = "MICROBENCH_OUTPUT_FORMAT",
        num_args = 1
    )]
    pub output_format: OutputFormatKind,

    /// Save a machine-readable summary of the whole run to this json file
    #[arg(long = "save-summary", value_name = "PATH", env = "MICROBENCH_SAVE_SUMMARY")]
    pub save_summary: Option<PathBuf>,
}
