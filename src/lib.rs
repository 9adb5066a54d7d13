//! # sparmat
//!
//! **Sparse integer matrices with a plain-text triplet interchange format.**
//!
//! sparmat stores a matrix as a map from `(row, col)` coordinates to non-zero
//! integer values, parses and serializes a simple line-oriented text format,
//! and provides the three binary operations over it: addition, subtraction,
//! and multiplication.
//!
//! ## Text format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (1, 2, -8)
//! ```
//!
//! `rows=`/`cols=` headers may appear anywhere, blank lines are ignored, and
//! every other line must be a parenthesized triple of integers. Anything else
//! aborts parsing with [`error::Error::MalformedInput`].
//!
//! ## Quick start
//!
//! ```
//! use sparmat::prelude::*;
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)".parse()?;
//! let b: SparseMatrix = "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)".parse()?;
//!
//! let sum = a.add(&b)?;
//! let product = a.multiply(&b)?;
//!
//! assert_eq!(sum.get(0, 0), 4);
//! assert_eq!(product.get(0, 1), 4);
//! # Ok::<(), sparmat::error::Error>(())
//! ```
//!
//! ## Feature flags
//!
//! - `cli`: builds the `sparmat` binary (clap front end over [`op::Operation`])

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod matrix;
pub mod op;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matrix::SparseMatrix;
    pub use crate::op::Operation;
}
