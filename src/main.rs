//! The `microbench` binary

use std::io::Write;

use colored::{control, Colorize};
use env_logger::Env;
use log::error;
use microbench::runner::envs;

/// The main function of the `microbench` binary
///
/// We initialize the logging interface and configure the usage of colors as early as possible
/// here. Then we call the main [`microbench::runner::run`] library function catching and printing
/// errors.
fn main() {
    // Configure the colored crate to respect MICROBENCH_COLOR and CARGO_TERM_COLOR
    let microbench_color = std::env::var(envs::MICROBENCH_COLOR).ok();
    if let Some(var) = microbench_color
        .clone()
        .or_else(|| std::env::var(envs::CARGO_TERM_COLOR).ok())
    {
        if var == "never" {
            control::set_override(false);
        } else if var == "always" {
            control::set_override(true);
        } else {
            // do nothing
        }
    }

    // Configure the env_logger crate to respect MICROBENCH_COLOR and CARGO_TERM_COLOR
    env_logger::Builder::from_env(
        Env::default()
            .filter_or(envs::MICROBENCH_LOG, "warn")
            .write_style(
                microbench_color.map_or_else(|| envs::CARGO_TERM_COLOR, |_| envs::MICROBENCH_COLOR),
            ),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{}: {:<5}: {}",
            record
                .module_path()
                .unwrap_or_else(|| record.module_path_static().unwrap_or("???")),
            match record.level() {
                log::Level::Error => "Error".red().bold(),
                log::Level::Warn => "Warn".yellow().bold(),
                log::Level::Info => "Info".green().bold(),
                log::Level::Debug => "Debug".blue().bold(),
                log::Level::Trace => "Trace".cyan().bold(),
            },
            record.args()
        )
    })
    .init();

    match microbench::runner::run() {
        Ok(()) => {}
        Err(error) => {
            error!("{error}");
            std::process::exit(1);
        }
    }
}
