//! # Column inspection
//!
//! Structural queries on single columns of a tableau.
//!
//! These compare exactly against zero and one. Pivoting writes exact zeros and ones into the pivot
//! column, so columns brought into the basis by this crate are recognized regardless of rounding
//! elsewhere in the tableau.
use itertools::Itertools;
use num_traits::Float;

/// Position of the one in a standard basis vector.
///
/// # Arguments
///
/// * `column`: Values to inspect.
///
/// # Return value
///
/// The index of the single nonzero value if that value equals one, `None` otherwise.
pub fn standard_basis_position<F: Float>(column: &[F]) -> Option<usize> {
    column.iter()
        .positions(|value| !value.is_zero())
        .exactly_one()
        .ok()
        .filter(|&index| column[index] == F::one())
}

/// Whether `column` has exactly one nonzero value, and that value is one.
pub fn is_standard_basis_vector<F: Float>(column: &[F]) -> bool {
    standard_basis_position(column).is_some()
}
