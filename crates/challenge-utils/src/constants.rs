//! Shared numeric constants
//!
//! Minimum accepted inputs for the generators, range defaults and the
//! reference limits of the bundled problems.

// =============================================================================
// Validation minimums
// =============================================================================

/// Default minimum accepted by the integer validator
pub const DEFAULT_MIN_VALUE: u64 = 1;

/// Minimum sequence index (0-indexed sequences)
pub const FIBONACCI_MIN_INDEX: u64 = 0;

/// Minimum input for divisor enumeration
pub const FACTORS_MIN_INPUT: u64 = 1;

/// Minimum input for prime factorization (1 has no prime divisors)
pub const PRIME_FACTORS_MIN_INPUT: u64 = 2;

// =============================================================================
// Range defaults
// =============================================================================

/// Default range start
pub const DEFAULT_RANGE_START: f64 = 0.0;

/// Default range step
pub const DEFAULT_RANGE_STEP: f64 = 1.0;

// =============================================================================
// Problem limits
// =============================================================================

/// Project Euler #1 limit ("below 1000")
pub const EULER_001_LIMIT: u64 = 1000;

/// Project Euler #2 limit ("do not exceed four million")
pub const EULER_002_LIMIT: u64 = 4_000_000;
