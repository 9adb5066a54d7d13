//! Sparse matrix multiplication

use std::collections::HashMap;

use super::SparseMatrix;
use crate::error::{Error, Result};

impl SparseMatrix {
    /// Matrix multiplication: C = A * B
    ///
    /// Requires `self.ncols() == other.nrows()`; the result has shape
    /// `self.nrows() × other.ncols()`.
    ///
    /// # Algorithm
    ///
    /// Indexes `other`'s entries by row, then joins each stored entry
    /// `(r1, c1) = v1` of `self` against the entries of `other`'s row `c1`,
    /// accumulating `v1 * v2` into `(r1, c2)`. Equivalent to the full
    /// nested scan over both triplet sets, but only aligned pairs are
    /// visited. Products that accumulate to exactly 0 are dropped.
    ///
    /// Accumulation uses plain `i64` arithmetic: overflow panics in debug
    /// builds and wraps in release builds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the inner dimensions differ.
    ///
    /// # Example
    ///
    /// ```
    /// # use sparmat::matrix::SparseMatrix;
    /// // A:          B:          C = A * B:
    /// // [1, 0]      [3, 4]      [3, 4]
    /// // [0, 2]  *   [0, 0]  =   [0, 0]
    /// let mut a = SparseMatrix::new(2, 2);
    /// a.set(0, 0, 1);
    /// a.set(1, 1, 2);
    /// let mut b = SparseMatrix::new(2, 2);
    /// b.set(0, 0, 3);
    /// b.set(0, 1, 4);
    ///
    /// let c = a.multiply(&b)?;
    /// assert_eq!(c.get(0, 0), 3);
    /// assert_eq!(c.get(0, 1), 4);
    /// assert_eq!(c.get(1, 0), 0);
    /// # Ok::<(), sparmat::error::Error>(())
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::dimension_mismatch(
                "multiplication",
                self.shape(),
                other.shape(),
            ));
        }

        // Index other by row so each entry of self only meets the entries
        // it can actually pair with.
        let mut rows_of_other: HashMap<i64, Vec<(i64, i64)>> = HashMap::new();
        for (&(row, col), &value) in other.entries() {
            rows_of_other.entry(row).or_default().push((col, value));
        }

        let mut result = SparseMatrix::new(self.rows, other.cols);
        for (&(r1, c1), &v1) in self.entries() {
            if let Some(pairs) = rows_of_other.get(&c1) {
                for &(c2, v2) in pairs {
                    result.set(r1, c2, result.get(r1, c2) + v1 * v2);
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_triplets(rows: usize, cols: usize, triplets: &[(i64, i64, i64)]) -> SparseMatrix {
        let mut m = SparseMatrix::new(rows, cols);
        for &(r, c, v) in triplets {
            m.set(r, c, v);
        }
        m
    }

    #[test]
    fn test_multiply_diagonal_by_row() {
        // A = diag(1, 2), B has a single non-zero row
        let a = from_triplets(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = from_triplets(2, 2, &[(0, 0, 3), (0, 1, 4)]);

        let c = a.multiply(&b).unwrap();

        // Only A's (0,0) aligns with B's row 0; A's (1,1) meets nothing
        assert_eq!(c.shape(), [2, 2]);
        assert_eq!(c.nnz(), 2);
        assert_eq!(c.get(0, 0), 3);
        assert_eq!(c.get(0, 1), 4);
    }

    #[test]
    fn test_multiply_rectangular() {
        // A [2, 3]:        B [3, 2]:
        // [1, 0, 2]        [1, 0]
        // [0, 3, 0]        [0, 2]
        //                  [4, 0]
        let a = from_triplets(2, 3, &[(0, 0, 1), (0, 2, 2), (1, 1, 3)]);
        let b = from_triplets(3, 2, &[(0, 0, 1), (1, 1, 2), (2, 0, 4)]);

        let c = a.multiply(&b).unwrap();

        // C [2, 2]:
        // [1*1 + 2*4, 0    ] = [9, 0]
        // [0,         3*2  ]   [0, 6]
        assert_eq!(c.shape(), [2, 2]);
        assert_eq!(c.get(0, 0), 9);
        assert_eq!(c.get(1, 1), 6);
        assert_eq!(c.nnz(), 2);
    }

    #[test]
    fn test_multiply_accumulates_across_inner_dimension() {
        // Row vector times column vector: a 1x1 dot product
        let a = from_triplets(1, 3, &[(0, 0, 1), (0, 1, 2), (0, 2, 3)]);
        let b = from_triplets(3, 1, &[(0, 0, 4), (1, 0, 5), (2, 0, 6)]);

        let c = a.multiply(&b).unwrap();

        assert_eq!(c.shape(), [1, 1]);
        // 1*4 + 2*5 + 3*6
        assert_eq!(c.get(0, 0), 32);
    }

    #[test]
    fn test_multiply_cancelling_products_drop_out() {
        // (1)(2) + (2)(-1) = 0 at (0,0)
        let a = from_triplets(1, 2, &[(0, 0, 1), (0, 1, 2)]);
        let b = from_triplets(2, 1, &[(0, 0, 2), (1, 0, -1)]);

        let c = a.multiply(&b).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_multiply_by_empty_is_empty() {
        let a = from_triplets(2, 3, &[(0, 0, 1), (1, 2, 5)]);
        let b = SparseMatrix::new(3, 4);

        let c = a.multiply(&b).unwrap();
        assert_eq!(c.shape(), [2, 4]);
        assert!(c.is_empty());
    }

    #[test]
    fn test_multiply_inner_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3);
        let b = SparseMatrix::new(4, 5);

        let err = a.multiply(&b).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                op: "multiplication",
                lhs: [2, 3],
                rhs: [4, 5],
            }
        ));
    }

    #[test]
    fn test_multiply_matches_nested_scan() {
        // The indexed join must be observably identical to the reference
        // cross product over both triplet sets.
        let a = from_triplets(3, 3, &[(0, 0, 2), (0, 2, -1), (1, 1, 3), (2, 0, 4)]);
        let b = from_triplets(3, 3, &[(0, 1, 1), (1, 0, -2), (2, 2, 5), (0, 0, 7)]);

        let expected = {
            let mut result = SparseMatrix::new(3, 3);
            for (&(r1, c1), &v1) in a.entries() {
                for (&(r2, c2), &v2) in b.entries() {
                    if c1 == r2 {
                        result.set(r1, c2, result.get(r1, c2) + v1 * v2);
                    }
                }
            }
            result
        };

        assert_eq!(a.multiply(&b).unwrap(), expected);
    }
}
