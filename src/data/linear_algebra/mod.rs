//! # Linear algebra primitives
//!
//! Dense matrices used to represent simplex tableaus and helpers to inspect their columns.

pub mod matrix;
pub mod vector;

/// Default tolerance below which a pivot element is considered to be zero.
pub const EPSILON: f64 = 1e-9;
