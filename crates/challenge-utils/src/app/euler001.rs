//! Project Euler #1: Multiples of 3 or 5
//!
//! Sum of all natural numbers below `limit` that are multiples of 3 or 5.
//! Two implementations are provided and must always agree.

use crate::domain::range::{RangeOptions, range};
use crate::domain::sum::array_sum;
use crate::domain::validation::{Input, IntegerGuard};
use crate::error::Result;

/// Set-union implementation
///
/// Generates the multiples of 3 and of 5 separately and sums their union.
pub fn sum_multiples_of_3_and_5(limit: impl Into<Input>) -> Result<f64> {
    let limit = IntegerGuard::new("sum_multiples_of_3_and_5()")
        .with_min(0)
        .check(limit)? as f64;

    let mut multiples = range(RangeOptions::to(limit).with_step(3.0))?;
    multiples.extend(range(RangeOptions::to(limit).with_step(5.0))?);

    // Multiples of 15 appear in both
    multiples.sort_by(f64::total_cmp);
    multiples.dedup();

    let total = array_sum(&multiples)?;
    log::trace!("euler001 set-union: limit={limit} terms={} total={total}", multiples.len());
    Ok(total)
}

/// Filter implementation
///
/// Walks every number below `limit` once and keeps the multiples.
pub fn sum_multiples_of_3_and_5_filtered(limit: impl Into<Input>) -> Result<f64> {
    let limit = IntegerGuard::new("sum_multiples_of_3_and_5_filtered()")
        .with_min(0)
        .check(limit)? as f64;

    let multiples: Vec<f64> = range(RangeOptions::to(limit))?
        .into_iter()
        .filter(|n| n % 3.0 == 0.0 || n % 5.0 == 0.0)
        .collect();

    let total = array_sum(&multiples)?;
    log::trace!("euler001 filter: limit={limit} terms={} total={total}", multiples.len());
    Ok(total)
}
