//! Operation selection and dispatch over matrix files
//!
//! The collaborator surface: a caller supplies an operation name and three
//! file paths; [`Operation::run_on_files`] loads both operands, dispatches,
//! and saves the serialized result. There is no process-wide state.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

/// A binary matrix operation selected by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Element-wise addition
    Add,
    /// Element-wise subtraction
    Subtract,
    /// Matrix multiplication
    Multiply,
}

impl Operation {
    /// Returns the operation name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply the operation to two matrices
    ///
    /// # Errors
    ///
    /// Propagates [`Error::DimensionMismatch`] from the underlying
    /// operation.
    pub fn apply(&self, lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.sub(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }

    /// Load both operand files, apply the operation, and save the result
    ///
    /// Returns the result matrix so callers can report on it. All errors
    /// (I/O, parse, dimension) are terminal and propagate unchanged.
    pub fn run_on_files(&self, lhs: &Path, rhs: &Path, output: &Path) -> Result<SparseMatrix> {
        let a = SparseMatrix::from_path(lhs)?;
        let b = SparseMatrix::from_path(rhs)?;
        debug!(
            "running {} on {} and {}",
            self.name(),
            lhs.display(),
            rhs.display()
        );
        let result = self.apply(&a, &b)?;
        result.save_to_file(output)?;
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Parse an operation name, tolerating surrounding whitespace and case
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            other => Err(Error::UnknownOperation {
                name: other.to_string(),
            }),
        }
    }
}
