//! freeCodeCamp daily coding challenges

use crate::constants::FIBONACCI_MIN_INDEX;
use crate::domain::fibonacci::fibonacci;
use crate::domain::validation::{Input, IntegerGuard};
use crate::error::Result;

/// Challenge #145: the nth Fibonacci number
pub fn nth_fibonacci(n: impl Into<Input>) -> Result<f64> {
    let n = IntegerGuard::new("nth_fibonacci()")
        .with_min(FIBONACCI_MIN_INDEX)
        .check(n)?;
    fibonacci(n)
}
