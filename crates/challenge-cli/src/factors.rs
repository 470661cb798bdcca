//! Divisor CLI
//!
//! Usage: factors <N> [--prime]
//!
//! Prints all divisors of N, or only its unique prime factors with
//! `--prime`, space-separated in ascending order.
//!
//! Example:
//!   factors 60 --prime
//!   2 3 5

use challenge_utils::{Input, factors, prime_factors};
use clap::Parser;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(version, about = "List the divisors or prime factors of N")]
struct Args {
    /// Positive integer to factor
    #[arg(
        value_parser = |s: &str| s.parse::<Input>(),
        allow_negative_numbers = true
    )]
    n: Input,

    /// Only list unique prime factors
    #[arg(long)]
    prime: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let result = if args.prime {
        prime_factors(args.n)
    } else {
        factors(args.n)
    };
    log::info!("factored in {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);

    match result {
        Ok(values) => {
            let line: Vec<String> = values.iter().map(u64::to_string).collect();
            println!("{}", line.join(" "));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
