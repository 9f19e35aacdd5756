//! Helper methods for the accuracy of floating point calculations.
use num_traits::{Float, NumCast};

use crate::data::linear_algebra::EPSILON;

/// Decides when a floating point value is too small to divide by.
///
/// A value is negligible when its magnitude does not exceed `absolute + relative * scale`. The
/// `scale` is the largest magnitude among the values it is compared with; for a pivot element that
/// is the column it lives in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance<F> {
    /// Magnitude at or below which any value counts as zero.
    pub absolute: F,
    /// Fraction of the scale at or below which a value counts as zero.
    pub relative: F,
}

impl<F: Float> Tolerance<F> {
    /// Create a new tolerance.
    ///
    /// # Arguments
    ///
    /// * `absolute`: Nonnegative absolute bound.
    /// * `relative`: Nonnegative bound relative to the scale of the compared values.
    pub fn new(absolute: F, relative: F) -> Self {
        debug_assert!(absolute >= F::zero());
        debug_assert!(relative >= F::zero());

        Self { absolute, relative }
    }

    /// A tolerance that ignores the scale of the surrounding values.
    pub fn absolute(absolute: F) -> Self {
        Self::new(absolute, F::zero())
    }

    /// Whether `value` should be treated as zero.
    ///
    /// `NaN` is always negligible: it can't be divided by either.
    ///
    /// # Arguments
    ///
    /// * `value`: Value to test.
    /// * `scale`: Magnitude of the largest value `value` is compared against.
    pub fn is_negligible(&self, value: F, scale: F) -> bool {
        !(value.abs() > self.absolute + self.relative * scale.abs())
    }
}

impl<F: Float> Default for Tolerance<F> {
    /// Absolute bound `EPSILON`, or the machine epsilon of `F` if `EPSILON` can't be represented.
    ///
    /// There is no relative component: large values elsewhere in a column, such as a big-M
    /// objective coefficient, don't make a pivot of normal magnitude negligible.
    fn default() -> Self {
        let epsilon = <F as NumCast>::from(EPSILON).unwrap_or_else(F::epsilon);
        Self::absolute(epsilon)
    }
}
