//! Nth Fibonacci CLI
//!
//! Usage: nth_fibonacci <N>
//!
//! Example:
//!   nth_fibonacci 35
//!   9227465

use challenge_utils::{Input, nth_fibonacci};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Print the Nth Fibonacci number (0-indexed)")]
struct Args {
    /// Sequence index, 0 or greater
    #[arg(
        value_parser = |s: &str| s.parse::<Input>(),
        allow_negative_numbers = true
    )]
    n: Input,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::debug!("n = {}", args.n);

    match nth_fibonacci(args.n) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
