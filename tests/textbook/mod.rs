//! Small linear programs in tableau form, pivoted by hand the way a textbook exercise would.
use relp_pivot::DenseMatrix;

mod test;

/// Maximize `3x + 2y` subject to `x + y <= 4` and `x + 3y <= 6`.
///
/// Slack variables are columns 2 and 3, the objective row is the last row with its own basic
/// column 4. The right-hand side is the last column.
pub fn with_objective_row() -> DenseMatrix<f64> {
    DenseMatrix::from_primitive_data(vec![
        vec![1, 1, 1, 0, 0, 4],
        vec![1, 3, 0, 1, 0, 6],
        vec![-3, -2, 0, 0, 1, 0],
    ]).unwrap()
}

/// The constraints of `with_objective_row`, without the objective.
pub fn constraints_only() -> DenseMatrix<f64> {
    DenseMatrix::from_primitive_data(vec![
        vec![1, 1, 1, 0, 4],
        vec![2, 1, 0, 1, 6],
    ]).unwrap()
}
