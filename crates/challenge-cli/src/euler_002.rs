//! Project Euler #2 CLI
//!
//! Usage: euler_002 [LIMIT]
//!
//! Prints the sum of the even Fibonacci numbers below LIMIT
//! (default 4,000,000).

use challenge_utils::constants::EULER_002_LIMIT;
use challenge_utils::{Input, even_fibonacci_sum};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Sum of the even Fibonacci numbers below LIMIT")]
struct Args {
    /// Exclusive upper bound
    #[arg(
        default_value_t = Input::from(EULER_002_LIMIT),
        value_parser = |s: &str| s.parse::<Input>(),
        allow_negative_numbers = true
    )]
    limit: Input,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match even_fibonacci_sum(args.limit) {
        Ok(total) => println!("{}", total),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
