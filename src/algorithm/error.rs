//! # Errors raised while pivoting
//!
//! A pivot is rejected before the tableau is touched, so none of these errors come with a partially
//! modified tableau.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Direction of an index into a tableau.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    Row,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// A single pivot could not be performed.
#[derive(Clone, Debug, PartialEq)]
pub enum PivotError {
    /// The index is not smaller than the number of rows or columns of the tableau.
    InvalidIndex {
        /// Whether a row or column index was out of range.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// Number of rows or columns in the tableau.
        bound: usize,
    },
    /// The column is already a standard basis vector, but its one is not at the requested row.
    ///
    /// Pivoting would remove the variable from the basis position it already occupies.
    BasisConflict {
        /// Column that was requested to enter the basis.
        column: usize,
        /// Row it was requested to enter at.
        row: usize,
        /// Row at which the column currently has its one.
        basic_row: usize,
    },
    /// The pivot element is (numerically) zero, so its row can't be normalized.
    SingularPivot {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
        /// Value of the pivot element, converted for reporting.
        value: f64,
    },
}

impl Display for PivotError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PivotError::InvalidIndex { axis, index, bound } => write!(
                f, "PivotError: {} index {} out of range, tableau has {} of them", axis, index, bound,
            ),
            PivotError::BasisConflict { column, row, basic_row } => write!(
                f, "PivotError: variable {} is already in the basis, but at row {} instead of row {}",
                column, basic_row, row,
            ),
            PivotError::SingularPivot { row, column, value } => write!(
                f, "PivotError: need nonzero pivot element, value at ({}, {}) is {}", row, column, value,
            ),
        }
    }
}

impl Error for PivotError {}

/// A basis exchange was aborted.
#[derive(Clone, Debug, PartialEq)]
pub enum BasisExchangeError {
    /// The number of basis indices differs from the number of rows.
    ///
    /// Detected before any pivot is attempted.
    ShapeMismatch {
        #[allow(missing_docs)]
        nr_rows: usize,
        #[allow(missing_docs)]
        nr_basis_indices: usize,
    },
    /// Bringing `column` into the basis at row `position` failed.
    Pivot {
        /// Index into the requested basis, equal to the pivot row.
        position: usize,
        /// Column that was to become basic.
        column: usize,
        /// Why the pivot failed.
        source: PivotError,
    },
}

impl Display for BasisExchangeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BasisExchangeError::ShapeMismatch { nr_rows, nr_basis_indices } => write!(
                f, "BasisExchangeError: need {} basis variables, got {}", nr_rows, nr_basis_indices,
            ),
            BasisExchangeError::Pivot { position, column, source } => write!(
                f, "BasisExchangeError: making column {} basis element {} failed: {}",
                column, position, source,
            ),
        }
    }
}

impl Error for BasisExchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BasisExchangeError::ShapeMismatch { .. } => None,
            BasisExchangeError::Pivot { source, .. } => Some(source),
        }
    }
}
