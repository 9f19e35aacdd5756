//! # Algorithms
//!
//! Elementary steps of the tableau simplex method.
pub mod error;
pub mod pivot;
