//! Divisor and prime-factor computation by trial division

use crate::constants::{FACTORS_MIN_INPUT, PRIME_FACTORS_MIN_INPUT};
use crate::domain::validation::{Input, IntegerGuard};
use crate::error::Result;

/// All positive divisors of `n`, ascending
///
/// Trial-divides `1..=isqrt(n)`; each hit `i` contributes both `i` and
/// `n / i`.
///
/// # Errors
/// `n` must be an integer `>= 1`.
pub fn factors(n: impl Into<Input>) -> Result<Vec<u64>> {
    let n = IntegerGuard::new("factors()")
        .with_min(FACTORS_MIN_INPUT)
        .check(n)?;

    if n == 1 {
        return Ok(vec![1]);
    }

    let mut divisors = Vec::new();
    for i in 1..=n.isqrt() {
        if n % i == 0 {
            divisors.push(i);
            divisors.push(n / i);
        }
    }

    // Perfect squares push their root twice
    divisors.sort_unstable();
    divisors.dedup();
    Ok(divisors)
}

/// Unique prime divisors of `n`, ascending
///
/// Strips 2, then tries odd candidates. Once `candidate^2` exceeds the
/// remaining quotient, whatever is left (if > 1) is prime.
///
/// # Errors
/// `n` must be an integer `>= 2`.
pub fn prime_factors(n: impl Into<Input>) -> Result<Vec<u64>> {
    let mut remaining = IntegerGuard::new("prime_factors()")
        .with_min(PRIME_FACTORS_MIN_INPUT)
        .check(n)?;

    let mut primes = Vec::new();

    while remaining % 2 == 0 {
        primes.push(2);
        remaining /= 2;
    }

    let mut candidate: u64 = 3;
    while remaining > 1 {
        // u128 keeps candidate^2 from overflowing near u64::MAX
        if (candidate as u128) * (candidate as u128) > remaining as u128 {
            primes.push(remaining);
            break;
        }
        while remaining % candidate == 0 {
            primes.push(candidate);
            remaining /= candidate;
        }
        candidate += 2;
    }

    primes.sort_unstable();
    primes.dedup();
    Ok(primes)
}
