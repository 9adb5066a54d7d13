//! Error types for sparmat

use thiserror::Error;

/// Result type alias using sparmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sparmat operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input text is not a valid matrix description
    ///
    /// Raised when a line is neither a `rows=`/`cols=` header nor a
    /// well-formed `(<row>, <col>, <value>)` triple. Parsing aborts at the
    /// first offending line; no partial matrix is returned.
    #[error("Input file has wrong format")]
    MalformedInput,

    /// Operand shapes are incompatible for an operation
    #[error("Matrix dimensions do not match for {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape
        lhs: [usize; 2],
        /// Right-hand side shape
        rhs: [usize; 2],
    },

    /// File read/write failure, propagated unchanged
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation name is not one of add/subtract/multiply
    #[error("Invalid operation '{name}'")]
    UnknownOperation {
        /// The rejected name
        name: String,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(op: &'static str, lhs: [usize; 2], rhs: [usize; 2]) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }
}
