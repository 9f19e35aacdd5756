//! # Dense matrix
//!
//! Row-major storage of a simplex tableau. Dimensions are fixed at creation; the elementary row
//! operations below are all that pivoting needs.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use num_traits::{Float, NumCast, ToPrimitive};

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same, nonzero, length.
    ///
    /// # Return value
    ///
    /// The matrix, or a `ShapeError` if there are no values or the row lengths differ.
    pub fn new(data: Vec<Vec<F>>) -> Result<Self, ShapeError> {
        let (nr_rows, nr_columns) = get_data_dimensions(&data)?;

        Ok(DenseMatrix { data, nr_rows, nr_columns })
    }

    /// Create a `DenseMatrix` from rows of any primitive number type.
    ///
    /// Integer input is converted, such that the divisions done while pivoting behave.
    ///
    /// # Return value
    ///
    /// The matrix, or a `ShapeError` if the dimensions are invalid or a value can't be represented
    /// as an `F`.
    pub fn from_primitive_data<T: ToPrimitive>(data: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        get_data_dimensions(&data)?;

        let data = data.into_iter()
            .enumerate()
            .map(|(i, row)| row.into_iter()
                .enumerate()
                .map(|(j, value)| <F as NumCast>::from(value).ok_or(ShapeError::Unrepresentable { row: i, column: j }))
                .collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(data)
    }

    /// Create a dense square identity matrix of size `len`.
    ///
    /// # Return value
    ///
    /// The matrix, or `ShapeError::Empty` if `len` is zero.
    pub fn identity(len: usize) -> Result<Self, ShapeError> {
        if len == 0 {
            return Err(ShapeError::Empty);
        }

        let data = (0..len)
            .map(|i| (0..len)
                .map(|j| if i == j { F::one() } else { F::zero() })
                .collect())
            .collect();

        Ok(DenseMatrix { data, nr_rows: len, nr_columns: len })
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Divide all values in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: F) {
        debug_assert!(i < self.nr_rows);

        for value in self.data[i].iter_mut() {
            *value = *value / divisor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let value = self.data[write_row][j] + factor * self.data[read_row][j];
            self.data[write_row][j] = value;
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F: Float + Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().map(|value| format!("{:>10.4}", value)).join(" "))?;
        }

        Ok(())
    }
}

/// Row data could not be turned into a matrix.
#[allow(missing_docs)]
#[derive(Debug, Eq, PartialEq)]
pub enum ShapeError {
    /// There are no rows, or the first row has no values.
    Empty,
    /// Row `row` has `length` values, while the first row has `expected` values.
    RaggedRow {
        row: usize,
        length: usize,
        expected: usize,
    },
    /// The value at (`row`, `column`) has no representation in the element type.
    Unrepresentable {
        row: usize,
        column: usize,
    },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "ShapeError: a matrix needs at least one value"),
            ShapeError::RaggedRow { row, length, expected } => write!(
                f, "ShapeError: row {} has length {}, but the first row has length {}",
                row, length, expected,
            ),
            ShapeError::Unrepresentable { row, column } => write!(
                f, "ShapeError: value at ({}, {}) can't be represented as a float", row, column,
            ),
        }
    }
}

impl Error for ShapeError {}

/// If all row sizes agree, return the dimensions of `data`.
fn get_data_dimensions<T>(data: &[Vec<T>]) -> Result<(usize, usize), ShapeError> {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);
    if nr_rows == 0 || nr_columns == 0 {
        return Err(ShapeError::Empty);
    }

    match data.iter().find_position(|row| row.len() != nr_columns) {
        Some((row, values)) => Err(ShapeError::RaggedRow { row, length: values.len(), expected: nr_columns }),
        None => Ok((nr_rows, nr_columns)),
    }
}
