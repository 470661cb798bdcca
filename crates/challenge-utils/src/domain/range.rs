//! Half-open numeric ranges
//!
//! `start, start + step, start + 2*step, ...` up to but excluding `stop`,
//! in the same spirit as Python's `range` but over `f64` so fractional steps
//! work. Each value is computed as `start + i * step`; floating drift is not
//! compensated.

use std::iter::FusedIterator;

use crate::constants::{DEFAULT_RANGE_START, DEFAULT_RANGE_STEP};
use crate::error::{NumError, Result};

const CONTEXT: &str = "range()";

/// Range parameters
///
/// `start` defaults to `0.0` and `step` to `1.0`; `stop` is always required.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeOptions {
    /// First value (inclusive)
    pub start: f64,
    /// Bound (exclusive)
    pub stop: f64,
    /// Increment; negative steps count down
    pub step: f64,
}

impl RangeOptions {
    /// Fully specified range
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// `[0, stop)` with step 1
    pub fn to(stop: f64) -> Self {
        Self {
            start: DEFAULT_RANGE_START,
            stop,
            step: DEFAULT_RANGE_STEP,
        }
    }

    /// Set the start value
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Set the step
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("start", self.start),
            ("stop", self.stop),
            ("step", self.step),
        ] {
            if !value.is_finite() {
                log::debug!("rejected {CONTEXT} parameter {name}={value}");
                return Err(NumError::NonFiniteParameter {
                    context: CONTEXT.to_string(),
                    name,
                    value,
                });
            }
        }
        if self.step == 0.0 {
            log::debug!("rejected {CONTEXT} zero step");
            return Err(NumError::ZeroStep {
                context: CONTEXT.to_string(),
            });
        }
        Ok(())
    }
}

/// Lazy iterator over a validated [`RangeOptions`]
#[derive(Clone, Debug)]
pub struct RangeIter {
    options: RangeOptions,
    index: u64,
    done: bool,
}

impl RangeIter {
    fn in_bounds(&self, value: f64) -> bool {
        if self.options.step > 0.0 {
            value < self.options.stop
        } else {
            value > self.options.stop
        }
    }
}

impl Iterator for RangeIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }

        let RangeOptions { start, step, .. } = self.options;
        let value = start + self.index as f64 * step;
        if !self.in_bounds(value) {
            self.done = true;
            return None;
        }

        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }

        let RangeOptions { start, stop, step } = self.options;
        let total = ((stop - start) / step).ceil();
        if total <= 0.0 {
            return (0, Some(0));
        }

        // One extra slot absorbs rounding in the division
        let remaining = total - self.index as f64 + 1.0;
        if remaining >= usize::MAX as f64 {
            (0, None)
        } else {
            (0, Some(remaining.max(0.0) as usize))
        }
    }
}

impl FusedIterator for RangeIter {}

/// Validate `options` and return a lazy iterator over the range
///
/// # Errors
/// - `Type`: `start`, `stop` or `step` is NaN or infinite
/// - `Range`: `step` is zero
pub fn range_iter(options: RangeOptions) -> Result<RangeIter> {
    options.validate()?;
    Ok(RangeIter {
        options,
        index: 0,
        done: false,
    })
}

/// Generate the half-open range described by `options`
///
/// Empty when `start >= stop` with a positive step, or `start <= stop` with
/// a negative step.
pub fn range(options: RangeOptions) -> Result<Vec<f64>> {
    Ok(range_iter(options)?.collect())
}
