//! Project Euler #2: Even Fibonacci numbers

use crate::domain::fibonacci::even_fibonacci;
use crate::domain::sum::array_sum;
use crate::domain::validation::{Input, IntegerGuard};
use crate::error::Result;

/// Sum of the even Fibonacci terms strictly below `limit`
pub fn even_fibonacci_sum(limit: impl Into<Input>) -> Result<f64> {
    let limit = IntegerGuard::new("even_fibonacci_sum()")
        .with_min(0)
        .check(limit)? as f64;

    let mut terms = Vec::new();
    for k in 0u64.. {
        let term = even_fibonacci(k)?;
        if term >= limit {
            break;
        }
        terms.push(term);
    }

    let total = array_sum(&terms)?;
    log::trace!("euler002: limit={limit} terms={} total={total}", terms.len());
    Ok(total)
}
