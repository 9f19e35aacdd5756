//! # Number types
//!
//! Tableaus hold floating point values of any type implementing `num_traits::Float`. Correctness
//! guarantees are harder to give than with exact arithmetic due to (accumulating) rounding errors,
//! so comparisons with zero go through a configurable tolerance.
pub mod numerical_precision;
