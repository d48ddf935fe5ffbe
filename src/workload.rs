//! The workloads measured by the benchmark suite
//!
//! Every workload is a small, self-contained procedure with a deterministic, printable result.
//! The suite inputs and the functions turning workloads into output strings live in
//! [`crate::runner::bench`].

/// Sort `array` in ascending order with an unoptimized bubble sort
///
/// The outer loop always runs `array.len()` passes and the inner loop shrinks by one slot per
/// pass. There is no early exit on an already sorted array, so the number of comparisons depends
/// only on the length of the input.
pub fn bubble_sort<T>(mut array: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    for i in 0..array.len() {
        for j in 1..array.len() - i {
            if array[j] < array[j - 1] {
                array.swap(j, j - 1);
            }
        }
    }
    array
}

/// Compute the nth fibonacci number with naive double recursion
///
/// The base case is `fibonacci(n) == n` for `n < 2`, so `fibonacci(28) == 317811`.
pub fn fibonacci(n: u64) -> u64 {
    match n {
        0 | 1 => n,
        n => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// A `Toggle` holds a single boolean state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    state: bool,
}

impl Toggle {
    /// Create a new `Toggle` with the given start state
    pub fn new(state: bool) -> Self {
        Self { state }
    }

    /// Flip the stored state and return the new value
    pub fn activate(&mut self) -> bool {
        self.state = !self.state;
        self.state
    }
}
