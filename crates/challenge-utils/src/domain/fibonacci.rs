//! Fibonacci sequences
//!
//! Both sequences are 0-indexed and computed iteratively from their
//! second-order recurrence, keeping only the last two terms. Terms are `f64`:
//! exact up to 2^53, approximate beyond, infinite past the native range.

use crate::constants::FIBONACCI_MIN_INDEX;
use crate::domain::validation::{Input, IntegerGuard};
use crate::error::Result;

/// Advance `a(k) = factor * a(k-1) + a(k-2)` from `(a0, a1)` to term `n`
#[inline]
fn linear_recurrence(n: u64, a0: f64, a1: f64, factor: f64) -> f64 {
    if n == 0 {
        return a0;
    }

    let mut prev = a0;
    let mut curr = a1;
    for _ in 1..n {
        let next = factor * curr + prev;
        prev = curr;
        curr = next;
    }
    curr
}

/// nth term of 0, 1, 1, 2, 3, 5, 8, 13, ...
///
/// # Errors
/// `n` must be an integer `>= 0` (see [`IntegerGuard`]).
pub fn fibonacci(n: impl Into<Input>) -> Result<f64> {
    let n = IntegerGuard::new("fibonacci()")
        .with_min(FIBONACCI_MIN_INDEX)
        .check(n)?;
    Ok(linear_recurrence(n, 0.0, 1.0, 1.0))
}

/// nth even Fibonacci number: 0, 2, 8, 34, 144, 610, ...
///
/// Every third Fibonacci number is even, which gives the direct recurrence
/// `EF(n) = 4 * EF(n-1) + EF(n-2)`.
///
/// # Errors
/// `n` must be an integer `>= 0` (see [`IntegerGuard`]).
pub fn even_fibonacci(n: impl Into<Input>) -> Result<f64> {
    let n = IntegerGuard::new("even_fibonacci()")
        .with_min(FIBONACCI_MIN_INDEX)
        .check(n)?;
    Ok(linear_recurrence(n, 0.0, 2.0, 4.0))
}
