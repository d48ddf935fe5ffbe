//! A standalone benchmark: bubble sort a fixed sequence of 12 integers

use std::time::Instant;

use microbench::runner::{bench, format};

fn main() {
    let start = Instant::now();
    let output = bench::bubble();
    let elapsed = start.elapsed();

    println!("{output}");
    println!("{}", format::elapsed_line(elapsed));
}
