//! The benchmarks of the suite and their fixed workload inputs

use crate::workload::{bubble_sort, fibonacci, Toggle};

/// All benchmarks of the suite in execution order
pub const BENCHMARKS: &[Benchmark] = &[
    Benchmark {
        name: "bubble",
        description: "bubble sort a fixed sequence of 12 integers",
        run: bubble,
    },
    Benchmark {
        name: "fib",
        description: "compute the 28th fibonacci number 5 times",
        run: fib,
    },
    Benchmark {
        name: "toggle",
        description: "flip a boolean state object 100000 times",
        run: toggle,
    },
];

/// The fixed input sequence of the `bubble` benchmark
pub const BUBBLE_SAMPLE: [i32; 12] = [5, 6, 1, 2, 9, 14, 2, 15, 6, 7, 8, 97];

/// The fibonacci number computed by the `fib` benchmark
pub const FIB_INPUT: u64 = 28;

/// The number of times the `fib` benchmark repeats the computation
pub const FIB_ROUNDS: usize = 5;

/// The number of state flips of the `toggle` benchmark
pub const TOGGLE_FLIPS: usize = 100_000;

/// A single suite benchmark: a named workload with a printable result
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    /// The name used in the terminal output and for filtering
    pub name: &'static str,
    /// A short description of the workload shown in the benchmark header
    pub description: &'static str,
    /// Run the workload and return its observable result
    pub run: fn() -> String,
}

/// Run the bubble sort workload over [`BUBBLE_SAMPLE`]
///
/// The result is the sorted sequence in the default `Debug` representation of a vector.
pub fn bubble() -> String {
    let sorted = bubble_sort(BUBBLE_SAMPLE.to_vec());
    format!("{sorted:?}")
}

/// Run the fibonacci workload: [`FIB_ROUNDS`] computations of `fibonacci(FIB_INPUT)`
///
/// The result contains one line per round.
pub fn fib() -> String {
    let mut lines = Vec::with_capacity(FIB_ROUNDS);
    for _ in 0..FIB_ROUNDS {
        lines.push(fibonacci(FIB_INPUT).to_string());
    }
    lines.join("\n")
}

/// Run the toggle workload: flip a [`Toggle`] starting from `true` [`TOGGLE_FLIPS`] times
///
/// The result is the final state, exactly `true` or `false`. The flip count is even, so the state
/// returns to `true`.
pub fn toggle() -> String {
    let mut value = true;
    let mut toggle = Toggle::new(value);
    for _ in 0..TOGGLE_FLIPS {
        value = toggle.activate();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bubble_output_is_the_sorted_sample() {
        assert_eq!(bubble(), "[1, 2, 2, 5, 6, 6, 7, 8, 9, 14, 15, 97]");
    }

    #[test]
    fn test_fib_output_has_one_line_per_round() {
        assert_eq!(fib(), "317811\n317811\n317811\n317811\n317811");
    }

    #[test]
    fn test_toggle_output_is_true_after_an_even_flip_count() {
        assert_eq!(toggle(), "true");
    }

    #[test]
    fn test_benchmark_names_are_unique() {
        let mut names = BENCHMARKS.iter().map(|b| b.name).collect::<Vec<&str>>();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), BENCHMARKS.len());
    }
}
