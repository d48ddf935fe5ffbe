use assert_cmd::Command;

pub const BUBBLE: &str = env!("CARGO_BIN_EXE_bubble");
pub const FIB: &str = env!("CARGO_BIN_EXE_fib");
pub const MICROBENCH: &str = env!("CARGO_BIN_EXE_microbench");
pub const TOGGLE: &str = env!("CARGO_BIN_EXE_toggle");

/// Create a [`Command`] with a clean environment
///
/// All `MICROBENCH_*` variables and the cargo color setting are removed, so a caller's
/// environment cannot change the output contract under test.
pub fn get_command(path: &str) -> Command {
    let mut command = Command::new(path);
    for var in [
        "CARGO_TERM_COLOR",
        "MICROBENCH_COLOR",
        "MICROBENCH_FILTER",
        "MICROBENCH_LIST",
        "MICROBENCH_LOG",
        "MICROBENCH_NOSUMMARY",
        "MICROBENCH_OUTPUT_FORMAT",
        "MICROBENCH_SAVE_SUMMARY",
    ] {
        command.env_remove(var);
    }
    command
}
