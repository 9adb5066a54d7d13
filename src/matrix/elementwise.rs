//! Element-wise addition and subtraction

use super::SparseMatrix;
use crate::error::{Error, Result};

impl SparseMatrix {
    /// Element-wise addition: C = A + B
    ///
    /// Computes the sum of two sparse matrices with the same shape. The
    /// result starts as a copy of `self`'s entries; each entry of `other` is
    /// then accumulated at the same coordinate. Sums that cancel to exactly
    /// 0 are dropped from the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// # use sparmat::matrix::SparseMatrix;
    /// // A:          B:          C = A + B:
    /// // [1, 0]      [0, 2]      [1, 2]
    /// // [0, 3]  +   [4, 0]  =   [4, 3]
    /// let mut a = SparseMatrix::new(2, 2);
    /// a.set(0, 0, 1);
    /// a.set(1, 1, 3);
    /// let mut b = SparseMatrix::new(2, 2);
    /// b.set(0, 1, 2);
    /// b.set(1, 0, 4);
    ///
    /// let c = a.add(&b)?;
    /// assert_eq!(c.get(0, 1), 2);
    /// assert_eq!(c.get(1, 0), 4);
    /// # Ok::<(), sparmat::error::Error>(())
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::dimension_mismatch(
                "addition",
                self.shape(),
                other.shape(),
            ));
        }

        let mut result = self.clone();
        for (&(row, col), &value) in other.entries() {
            result.set(row, col, result.get(row, col) + value);
        }
        Ok(result)
    }

    /// Element-wise subtraction: C = A - B
    ///
    /// Symmetric to [`add`](SparseMatrix::add) with subtraction in the
    /// accumulation pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::dimension_mismatch(
                "subtraction",
                self.shape(),
                other.shape(),
            ));
        }

        let mut result = self.clone();
        for (&(row, col), &value) in other.entries() {
            result.set(row, col, result.get(row, col) - value);
        }
        Ok(result)
    }
}
