//! Project Euler #1 CLI
//!
//! Usage: euler_001 [LIMIT] [--filter]
//!
//! Prints the sum of all natural numbers below LIMIT (default 1000) that are
//! multiples of 3 or 5.
//!
//! Example:
//!   euler_001
//!   euler_001 10 --filter

use challenge_utils::constants::EULER_001_LIMIT;
use challenge_utils::{Input, sum_multiples_of_3_and_5, sum_multiples_of_3_and_5_filtered};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Sum of the multiples of 3 or 5 below LIMIT")]
struct Args {
    /// Exclusive upper bound
    #[arg(
        default_value_t = Input::from(EULER_001_LIMIT),
        value_parser = |s: &str| s.parse::<Input>(),
        allow_negative_numbers = true
    )]
    limit: Input,

    /// Use the filter implementation instead of the set union
    #[arg(long)]
    filter: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    let result = if args.filter {
        sum_multiples_of_3_and_5_filtered(args.limit)
    } else {
        sum_multiples_of_3_and_5(args.limit)
    };

    match result {
        Ok(total) => println!("{}", total),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
