//! # Data structures
//!
//! Tableau storage and the numerical policy used when operating on it.
pub mod linear_algebra;
pub mod number_types;
