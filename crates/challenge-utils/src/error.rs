//! Error types
//!
//! Every failure belongs to one of two kinds: the input has the wrong shape
//! ([`ErrorKind::Type`]) or the right shape but an unacceptable value
//! ([`ErrorKind::Range`]).

use thiserror::Error;

use crate::domain::validation::Input;

/// Error category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not the expected shape (not a number, not an integer, ...)
    Type,
    /// Input has the expected shape but lies outside the allowed values
    Range,
}

/// Numeric utility errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumError {
    /// Value is not numeric, or is NaN
    #[error("{context} requires a valid number")]
    NotANumber { context: String },

    /// Value is positive or negative infinity
    #[error("{context} does not accept infinity, received {value}")]
    Infinite { context: String, value: f64 },

    /// Value is finite but has a fractional part
    #[error("{context} requires an integer, received {value}")]
    NotAnInteger { context: String, value: f64 },

    /// Integral value below the accepted minimum
    #[error("{context} requires an integer >= {min}, received {value}")]
    BelowMinimum {
        context: String,
        value: Input,
        min: u64,
    },

    /// Integral value that does not fit the native index type
    #[error("{context} requires an integer <= {max}, received {value}")]
    AboveMaximum {
        context: String,
        value: Input,
        max: u64,
    },

    /// A named parameter is NaN or infinite
    #[error("{context} requires `{name}` to be a finite number, received {value}")]
    NonFiniteParameter {
        context: String,
        name: &'static str,
        value: f64,
    },

    /// Step of zero would never terminate
    #[error("{context} requires a non-zero step")]
    ZeroStep { context: String },

    /// Sequence element is NaN or infinite
    #[error("{context} requires finite numbers, element at index {index} is {value}")]
    NonFiniteElement {
        context: String,
        index: usize,
        value: f64,
    },
}

impl NumError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. }
            | Self::NotAnInteger { .. }
            | Self::NonFiniteParameter { .. }
            | Self::NonFiniteElement { .. } => ErrorKind::Type,
            Self::Infinite { .. }
            | Self::BelowMinimum { .. }
            | Self::AboveMaximum { .. }
            | Self::ZeroStep { .. } => ErrorKind::Range,
        }
    }

    /// Whether the input had the wrong shape
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Whether the input was out of range
    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, NumError>;
