//! Domain layer - Pure numeric functions
//!
//! This module contains the validation contract and the generators built on
//! top of it. Nothing here performs I/O or keeps state between calls.

pub mod factors;
pub mod fibonacci;
pub mod range;
pub mod sum;
pub mod validation;
