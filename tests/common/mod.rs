//! Common test utilities
#![allow(dead_code)]

use sparmat::matrix::SparseMatrix;

/// Build a matrix from dimensions and (row, col, value) triplets
pub fn matrix_from_triplets(
    rows: usize,
    cols: usize,
    triplets: &[(i64, i64, i64)],
) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(rows, cols);
    for &(row, col, value) in triplets {
        matrix.set(row, col, value);
    }
    matrix
}

/// Collect the stored entries as a sorted triplet list
pub fn triplets(matrix: &SparseMatrix) -> Vec<(i64, i64, i64)> {
    let mut out: Vec<_> = matrix
        .entries()
        .map(|(&(row, col), &value)| (row, col, value))
        .collect();
    out.sort_unstable();
    out
}
