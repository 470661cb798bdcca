//! challenge-utils - Numeric utilities for coding-challenge solutions
//!
//! This crate provides:
//! - Integer input validation with a two-kind error taxonomy (type / range)
//! - Half-open `f64` ranges and checked summation
//! - Fibonacci and even-Fibonacci terms by direct recurrence
//! - Divisors and unique prime factors by trial division
//! - Solutions to a handful of Project Euler / freeCodeCamp problems

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use app::daily::nth_fibonacci;
pub use app::euler001::{sum_multiples_of_3_and_5, sum_multiples_of_3_and_5_filtered};
pub use app::euler002::even_fibonacci_sum;
pub use constants::*;
pub use domain::factors::{factors, prime_factors};
pub use domain::fibonacci::{even_fibonacci, fibonacci};
pub use domain::range::{RangeIter, RangeOptions, range, range_iter};
pub use domain::sum::array_sum;
pub use domain::validation::{Input, IntegerGuard, validate_non_negative_integer};
pub use error::{ErrorKind, NumError, Result};
