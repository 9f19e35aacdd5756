//! # Basis exchange on simplex tableaus
//!
//! A single step of the tableau simplex method, as described in the book Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz: given a tableau and the
//! columns that should form its basis, row reduce the tableau such that those columns are the
//! standard basis vectors.
//!
//! Pivot rules, optimality tests and the iteration loop are up to the caller.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

pub use algorithm::error::{Axis, BasisExchangeError, PivotError};
pub use algorithm::pivot::{basis_exchange, basis_exchange_with, find_basis, make_basis_element, make_basis_element_with};
pub use data::linear_algebra::matrix::{DenseMatrix, ShapeError};
pub use data::linear_algebra::vector::is_standard_basis_vector;
pub use data::number_types::numerical_precision::Tolerance;
