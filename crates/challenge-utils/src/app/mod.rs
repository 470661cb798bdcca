//! Application layer - Problem solutions
//!
//! Thin call sites that validate their argument and compose the domain
//! functions into the answer of one challenge each.

pub mod daily;
pub mod euler001;
pub mod euler002;
