//! A standalone benchmark: flip a boolean state object 100000 times

use std::time::Instant;

use microbench::runner::{bench, format};

fn main() {
    let start = Instant::now();
    let output = bench::toggle();
    let elapsed = start.elapsed();

    println!("{output}");
    println!("{}", format::elapsed_line(elapsed));
}
