//! A standalone benchmark: compute the 28th fibonacci number 5 times

use std::time::Instant;

use microbench::runner::{bench, format};

fn main() {
    let start = Instant::now();
    let output = bench::fib();
    let elapsed = start.elapsed();

    println!("{output}");
    println!("{}", format::elapsed_line(elapsed));
}
