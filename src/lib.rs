//! A wall-clock micro-benchmark suite
//!
//! The crate consists of the [`workload`] module with the measured procedures and the [`runner`]
//! module which drives them. Four binaries are built from it: the standalone benchmarks `bubble`,
//! `toggle` and `fib`, each timing a single fixed workload, and the suite runner `microbench`
//! which runs the whole suite in one process.

pub mod error;
pub mod runner;
pub mod serde;
pub mod workload;
