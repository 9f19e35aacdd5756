//! # Basis exchange
//!
//! Gauss-Jordan pivoting on a dense tableau. Given the columns that should form the basis, the
//! tableau is row reduced such that the `i`-th of those columns becomes the `i`-th standard basis
//! vector.
//!
//! Choosing which columns enter the basis (a pivot rule) and deciding when to stop are left to the
//! caller. All rows of the tableau are pivoted, so it doesn't matter whether the caller included an
//! objective row in the tableau or not.
use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::error::{Axis, BasisExchangeError, PivotError};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::standard_basis_position;
use crate::data::number_types::numerical_precision::Tolerance;


/// Create a tableau with the provided basis.
///
/// Uses the default `Tolerance` to detect zero pivots, see `basis_exchange_with`.
pub fn basis_exchange<F: Float>(
    tableau: &DenseMatrix<F>,
    basis: &[usize],
) -> Result<DenseMatrix<F>, BasisExchangeError> {
    basis_exchange_with(tableau, basis, &Tolerance::default())
}

/// Create a tableau with the provided basis.
///
/// The input tableau is not modified. Pivots happen in the order of `basis`; each pivot may change
/// the columns of later basis indices, so a different order can lead to a different result.
///
/// # Arguments
///
/// * `tableau`: Tableau of `m` rows to derive the new tableau from.
/// * `basis`: `m` column indices. Column `basis[i]` becomes the `i`-th standard basis vector.
/// * `tolerance`: Decides which pivot elements are too small to divide by.
///
/// # Return value
///
/// A new tableau, or the first error encountered. A failed exchange never returns a partially
/// pivoted tableau.
pub fn basis_exchange_with<F: Float>(
    tableau: &DenseMatrix<F>,
    basis: &[usize],
    tolerance: &Tolerance<F>,
) -> Result<DenseMatrix<F>, BasisExchangeError> {
    if basis.len() != tableau.nr_rows() {
        return Err(BasisExchangeError::ShapeMismatch {
            nr_rows: tableau.nr_rows(),
            nr_basis_indices: basis.len(),
        });
    }

    debug!(
        "Exchanging basis of {} x {} tableau to {:?}",
        tableau.nr_rows(), tableau.nr_columns(), basis,
    );

    let mut exchanged = tableau.clone();
    for (position, &column) in basis.iter().enumerate() {
        make_basis_element_with(&mut exchanged, column, position, tolerance)
            .map_err(|source| BasisExchangeError::Pivot { position, column, source })?;
    }

    Ok(exchanged)
}

/// Make column `column` the `row`-th standard basis vector, using the default `Tolerance`.
pub fn make_basis_element<F: Float>(
    tableau: &mut DenseMatrix<F>,
    column: usize,
    row: usize,
) -> Result<(), PivotError> {
    make_basis_element_with(tableau, column, row, &Tolerance::default())
}

/// Pivot on element (`row`, `column`) in place.
///
/// Row `row` is divided by the pivot element, after which a multiple of it is subtracted from every
/// other row. The pivot column ends up being exactly the `row`-th standard basis vector.
///
/// If the column already is that standard basis vector, nothing changes.
///
/// # Errors
///
/// * `InvalidIndex` if `row` or `column` is out of range.
/// * `BasisConflict` if the column is a standard basis vector with its one at a different row.
/// * `SingularPivot` if the pivot element is negligible according to `tolerance`.
///
/// All are detected before the tableau is modified.
pub fn make_basis_element_with<F: Float>(
    tableau: &mut DenseMatrix<F>,
    column: usize,
    row: usize,
    tolerance: &Tolerance<F>,
) -> Result<(), PivotError> {
    trace!("Pivoting on ({}, {})", row, column);

    let pivot_value = validate_pivot(tableau, column, row, tolerance)
        .inspect_err(|error| debug!("Rejected pivot: {}", error))?;

    tableau.divide_row(row, pivot_value);
    tableau.set_value(row, column, F::one());

    for other_row in (0..tableau.nr_rows()).filter(|&i| i != row) {
        let factor = tableau.get_value(other_row, column);
        if factor.is_zero() {
            continue;
        }

        tableau.mul_add_rows(row, other_row, -factor);
        tableau.set_value(other_row, column, F::zero());
    }

    Ok(())
}

/// Check whether element (`row`, `column`) can be pivoted on.
///
/// # Return value
///
/// The pivot element.
fn validate_pivot<F: Float>(
    tableau: &DenseMatrix<F>,
    column: usize,
    row: usize,
    tolerance: &Tolerance<F>,
) -> Result<F, PivotError> {
    if row >= tableau.nr_rows() {
        return Err(PivotError::InvalidIndex { axis: Axis::Row, index: row, bound: tableau.nr_rows() });
    }
    if column >= tableau.nr_columns() {
        return Err(PivotError::InvalidIndex { axis: Axis::Column, index: column, bound: tableau.nr_columns() });
    }

    let values = tableau.column(column);
    if let Some(basic_row) = standard_basis_position(&values) {
        if basic_row != row {
            return Err(PivotError::BasisConflict { column, row, basic_row });
        }
    }

    let pivot_value = values[row];
    let scale = values.iter().fold(F::zero(), |largest, value| largest.max(value.abs()));
    if tolerance.is_negligible(pivot_value, scale) {
        return Err(PivotError::SingularPivot {
            row,
            column,
            value: pivot_value.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(pivot_value)
}

/// Find the columns that currently form (part of) a basis.
///
/// # Return value
///
/// For each row, the lowest index of a column that is the standard basis vector with its one in
/// that row, if there is such a column.
pub fn find_basis<F: Float>(tableau: &DenseMatrix<F>) -> Vec<Option<usize>> {
    let mut basis = vec![None; tableau.nr_rows()];
    for j in 0..tableau.nr_columns() {
        if let Some(row) = standard_basis_position(&tableau.column(j)) {
            basis[row].get_or_insert(j);
        }
    }

    basis
}
