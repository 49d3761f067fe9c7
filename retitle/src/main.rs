// src/main.rs
use clap::Parser;
use std::process;

use retitle::{Args, logging};

/// Exit status for any failed run.
const FAIL: i32 = 1;

fn main() {
    let args = Args::parse();

    if let Err(err) = logging::init_logging(args.verbose) {
        eprintln!("{err:#}");
    }

    if let Err(err) = retitle::run(args) {
        println!("{err:#}");
        process::exit(FAIL);
    }
}
