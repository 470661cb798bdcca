//! Summation

use crate::error::{NumError, Result};

/// Sum all elements, `0.0` for an empty slice
///
/// Every element must be finite; the first NaN or infinity is reported with
/// its index. Plain `f64` addition, left to right.
pub fn array_sum(numbers: &[f64]) -> Result<f64> {
    if let Some((index, &value)) = numbers.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        log::debug!("rejected array_sum() element {index}: {value}");
        return Err(NumError::NonFiniteElement {
            context: "array_sum()".to_string(),
            index,
            value,
        });
    }

    // Explicit fold: `Sum` for floats starts at -0.0
    Ok(numbers.iter().fold(0.0, |total, n| total + n))
}
