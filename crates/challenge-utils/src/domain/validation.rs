//! Integer input validation
//!
//! Every generator accepts an [`Input`] and narrows it to a `u64` through an
//! [`IntegerGuard`] before doing any work. Checks run in a fixed order:
//! numeric → finite → integral → minimum → fits in `u64`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_MIN_VALUE;
use crate::error::{NumError, Result};

/// Dynamically-shaped numeric argument
///
/// Callers may hand over integers, floats or raw text (e.g. a CLI argument);
/// only the guard decides whether the value is an acceptable index.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Integer(i128),
    Float(f64),
    Text(String),
}

macro_rules! input_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Input {
                #[inline]
                fn from(v: $t) -> Self {
                    Input::Integer(v as i128)
                }
            }
        )*
    };
}

input_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<i128> for Input {
    #[inline]
    fn from(v: i128) -> Self {
        Input::Integer(v)
    }
}

impl From<f64> for Input {
    #[inline]
    fn from(v: f64) -> Self {
        Input::Float(v)
    }
}

impl From<f32> for Input {
    #[inline]
    fn from(v: f32) -> Self {
        Input::Float(v as f64)
    }
}

impl From<&str> for Input {
    fn from(v: &str) -> Self {
        Input::Text(v.to_string())
    }
}

impl From<String> for Input {
    fn from(v: String) -> Self {
        Input::Text(v)
    }
}

/// Parse user-supplied text
///
/// Integers become `Integer`, other numerals (`"2.5"`, `"inf"`, `"NaN"`)
/// become `Float`, and anything else is kept as `Text` so validation can
/// reject it with a proper error.
impl FromStr for Input {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i128>() {
            return Ok(Input::Integer(v));
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return Ok(Input::Float(v));
        }
        Ok(Input::Text(s.to_string()))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Integer(v) => write!(f, "{}", v),
            Input::Float(v) => write!(f, "{}", v),
            Input::Text(v) => write!(f, "{:?}", v),
        }
    }
}

/// Validation descriptor: calling function name and minimum accepted value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegerGuard<'a> {
    /// Name used in error messages, e.g. `"fibonacci()"`
    pub context: &'a str,
    /// Smallest accepted value
    pub min_value: u64,
}

impl<'a> IntegerGuard<'a> {
    /// Guard with the default minimum (`DEFAULT_MIN_VALUE`)
    pub fn new(context: &'a str) -> Self {
        Self {
            context,
            min_value: DEFAULT_MIN_VALUE,
        }
    }

    /// Set the minimum accepted value
    pub fn with_min(mut self, min_value: u64) -> Self {
        self.min_value = min_value;
        self
    }

    /// Validate `value` and return it as `u64`
    ///
    /// # Errors
    /// - `Type`: text, NaN, or a non-integral float
    /// - `Range`: infinity, below `min_value`, or larger than `u64::MAX`
    pub fn check(&self, value: impl Into<Input>) -> Result<u64> {
        match value.into() {
            Input::Text(_) => Err(self.reject(NumError::NotANumber {
                context: self.context.to_string(),
            })),
            Input::Float(v) => self.check_float(v),
            Input::Integer(v) => self.check_integer(v),
        }
    }

    fn check_float(&self, v: f64) -> Result<u64> {
        if v.is_nan() {
            return Err(self.reject(NumError::NotANumber {
                context: self.context.to_string(),
            }));
        }
        if v.is_infinite() {
            return Err(self.reject(NumError::Infinite {
                context: self.context.to_string(),
                value: v,
            }));
        }
        if v.fract() != 0.0 {
            return Err(self.reject(NumError::NotAnInteger {
                context: self.context.to_string(),
                value: v,
            }));
        }
        if v < self.min_value as f64 {
            return Err(self.reject(NumError::BelowMinimum {
                context: self.context.to_string(),
                value: Input::Float(v),
                min: self.min_value,
            }));
        }
        // 2^64 is the first float that no longer fits
        if v >= 18_446_744_073_709_551_616.0 {
            return Err(self.reject(NumError::AboveMaximum {
                context: self.context.to_string(),
                value: Input::Float(v),
                max: u64::MAX,
            }));
        }
        Ok(v as u64)
    }

    fn check_integer(&self, v: i128) -> Result<u64> {
        if v < self.min_value as i128 {
            return Err(self.reject(NumError::BelowMinimum {
                context: self.context.to_string(),
                value: Input::Integer(v),
                min: self.min_value,
            }));
        }
        u64::try_from(v).map_err(|_| {
            self.reject(NumError::AboveMaximum {
                context: self.context.to_string(),
                value: Input::Integer(v),
                max: u64::MAX,
            })
        })
    }

    fn reject(&self, err: NumError) -> NumError {
        log::debug!("rejected input: {err}");
        err
    }
}

/// Validate that `value` is an integer `>= min_value`
///
/// Shorthand for `IntegerGuard::new(context).with_min(min_value).check(value)`.
pub fn validate_non_negative_integer(
    value: impl Into<Input>,
    context: &str,
    min_value: u64,
) -> Result<u64> {
    IntegerGuard::new(context).with_min(min_value).check(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of(value: impl Into<Input>, min: u64) -> Option<ErrorKind> {
        validate_non_negative_integer(value, "test()", min)
            .err()
            .map(|e| e.kind())
    }

    #[test]
    fn test_accepts_integers_at_and_above_min() {
        assert_eq!(validate_non_negative_integer(0, "f()", 0), Ok(0));
        assert_eq!(validate_non_negative_integer(5u8, "f()", 1), Ok(5));
        assert_eq!(validate_non_negative_integer(u64::MAX, "f()", 0), Ok(u64::MAX));
    }

    #[test]
    fn test_accepts_integral_floats() {
        assert_eq!(validate_non_negative_integer(12.0, "f()", 1), Ok(12));
        assert_eq!(validate_non_negative_integer(-0.0, "f()", 0), Ok(0));
    }

    #[test]
    fn test_default_min_is_one() {
        let guard = IntegerGuard::new("f()");
        assert_eq!(guard.min_value, DEFAULT_MIN_VALUE);
        assert_eq!(guard.check(1), Ok(1));
        assert!(guard.check(0).unwrap_err().is_range_error());
    }

    #[test]
    fn test_text_is_type_error() {
        assert_eq!(kind_of("12", 0), Some(ErrorKind::Type));
        assert_eq!(kind_of(String::new(), 0), Some(ErrorKind::Type));
    }

    #[test]
    fn test_nan_is_type_error() {
        assert_eq!(kind_of(f64::NAN, 0), Some(ErrorKind::Type));
    }

    #[test]
    fn test_infinity_is_range_error() {
        assert_eq!(kind_of(f64::INFINITY, 0), Some(ErrorKind::Range));
        assert_eq!(kind_of(f64::NEG_INFINITY, 0), Some(ErrorKind::Range));
    }

    #[test]
    fn test_fraction_is_type_error() {
        assert_eq!(kind_of(3.25, 0), Some(ErrorKind::Type));
        assert_eq!(kind_of(-0.5, 0), Some(ErrorKind::Type));
    }

    #[test]
    fn test_below_min_is_range_error() {
        assert_eq!(kind_of(-1, 0), Some(ErrorKind::Range));
        assert_eq!(kind_of(1, 2), Some(ErrorKind::Range));
        assert_eq!(kind_of(-3.0, 0), Some(ErrorKind::Range));
    }

    #[test]
    fn test_above_u64_is_range_error() {
        assert_eq!(kind_of(u64::MAX as i128 + 1, 0), Some(ErrorKind::Range));
        assert_eq!(kind_of(1e20, 0), Some(ErrorKind::Range));
    }

    #[test]
    fn test_check_order_fraction_before_minimum() {
        // -1.5 is both fractional and below the minimum; shape wins
        assert_eq!(kind_of(-1.5, 0), Some(ErrorKind::Type));
    }

    #[test]
    fn test_parse_input() {
        assert_eq!("42".parse::<Input>(), Ok(Input::Integer(42)));
        assert_eq!(" -7 ".parse::<Input>(), Ok(Input::Integer(-7)));
        assert_eq!("2.5".parse::<Input>(), Ok(Input::Float(2.5)));
        assert!(matches!("inf".parse::<Input>(), Ok(Input::Float(v)) if v.is_infinite()));
        assert_eq!("twelve".parse::<Input>(), Ok(Input::Text("twelve".to_string())));
    }

    #[test]
    fn test_parsed_input_validation() {
        let check = |s: &str| validate_non_negative_integer(s.parse::<Input>().unwrap(), "f()", 0);
        assert_eq!(check("10"), Ok(10));
        assert_eq!(check("10.0"), Ok(10));
        assert!(check("-1").unwrap_err().is_range_error());
        assert!(check("1.5").unwrap_err().is_type_error());
        assert!(check("abc").unwrap_err().is_type_error());
    }

    #[test]
    fn test_below_min_reports_original_value() {
        let err = validate_non_negative_integer(-1e40, "f()", 0).unwrap_err();
        assert_eq!(
            err,
            NumError::BelowMinimum {
                context: "f()".to_string(),
                value: Input::Float(-1e40),
                min: 0,
            }
        );
        assert!(err.to_string().contains(&(-1e40f64).to_string()));
        assert!(!err.to_string().contains(&i128::MIN.to_string()));
    }

    #[test]
    fn test_above_max_reports_original_value() {
        let value = i128::MAX;
        let err = validate_non_negative_integer(value, "f()", 0).unwrap_err();
        assert!(err.is_range_error());
        assert!(err.to_string().contains(&value.to_string()));
    }

    #[test]
    fn test_error_carries_context() {
        let err = validate_non_negative_integer(-7, "nth_fibonacci()", 0).unwrap_err();
        assert_eq!(
            err,
            NumError::BelowMinimum {
                context: "nth_fibonacci()".to_string(),
                value: Input::Integer(-7),
                min: 0,
            }
        );
    }
}
