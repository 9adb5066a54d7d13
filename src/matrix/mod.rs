//! Sparse matrix support for sparmat
//!
//! A matrix is stored in coordinate form: a map from `(row, col)` pairs to
//! non-zero integer values. Only non-zero entries are ever held, so storage
//! is O(nnz) regardless of the declared dimensions.
//!
//! The implementation is split by concern: the struct, construction, and
//! element access live in `core`; [`SparseMatrix::add`] and
//! [`SparseMatrix::sub`] in `elementwise`; [`SparseMatrix::multiply`] in
//! `matmul`; and the text interchange format (parsing via
//! [`std::str::FromStr`], serialization via [`std::fmt::Display`], file
//! load/save) in `text`.

mod core;
mod elementwise;
mod matmul;
mod text;

pub use core::SparseMatrix;
