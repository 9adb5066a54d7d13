//! Plain-text triplet format: parsing, serialization, file load/save
//!
//! The interchange format is line oriented:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (1, 2, -8)
//! ```
//!
//! `rows=`/`cols=` headers may appear anywhere (the last occurrence wins),
//! blank lines are skipped, and every other line must be a parenthesized
//! triple of comma-separated integers after trimming. The first line that is
//! neither aborts parsing with [`Error::MalformedInput`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use super::SparseMatrix;
use crate::error::{Error, Result};

impl FromStr for SparseMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut matrix = SparseMatrix::default();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(value) = line.strip_prefix("rows=") {
                matrix.rows = parse_dimension(value)?;
                continue;
            }
            if let Some(value) = line.strip_prefix("cols=") {
                matrix.cols = parse_dimension(value)?;
                continue;
            }
            let (row, col, value) = parse_entry(line)?;
            matrix.set(row, col, value);
        }
        Ok(matrix)
    }
}

/// Parse a `rows=`/`cols=` header value as a non-negative integer
fn parse_dimension(text: &str) -> Result<usize> {
    text.trim().parse().map_err(|_| Error::MalformedInput)
}

/// Parse a `(<row>, <col>, <value>)` entry line (already trimmed)
fn parse_entry(line: &str) -> Result<(i64, i64, i64)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(Error::MalformedInput)?;

    let mut fields = inner.split(',');
    let row = parse_field(fields.next())?;
    let col = parse_field(fields.next())?;
    let value = parse_field(fields.next())?;
    if fields.next().is_some() {
        return Err(Error::MalformedInput);
    }
    Ok((row, col, value))
}

/// Parse one comma-separated integer field, tolerating surrounding whitespace
fn parse_field(field: Option<&str>) -> Result<i64> {
    field
        .ok_or(Error::MalformedInput)?
        .trim()
        .parse()
        .map_err(|_| Error::MalformedInput)
}

impl fmt::Display for SparseMatrix {
    /// Serialize in the interchange format: `rows=`, `cols=`, then one
    /// `(<row>, <col>, <value>)` line per stored entry, in map order, with
    /// no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows={}", self.rows)?;
        write!(f, "\ncols={}", self.cols)?;
        for (&(row, col), &value) in self.entries() {
            write!(f, "\n({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }
}

impl SparseMatrix {
    /// Load a matrix from a text file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::MalformedInput`] if its contents do not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let matrix: SparseMatrix = text.parse()?;
        debug!(
            "loaded {}x{} matrix ({} non-zeros) from {}",
            matrix.rows,
            matrix.cols,
            matrix.nnz(),
            path.display()
        );
        Ok(matrix)
    }

    /// Write the serialized matrix to a file, overwriting existing content
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on write failure.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        debug!(
            "saved {}x{} matrix ({} non-zeros) to {}",
            self.rows,
            self.cols,
            self.nnz(),
            path.display()
        );
        Ok(())
    }
}
