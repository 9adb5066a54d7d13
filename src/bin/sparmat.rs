//! Command-line front end for sparmat
//!
//! Loads two matrix files, applies an operation, and writes the result:
//!
//! ```sh
//! sparmat add a.txt b.txt sum.txt
//! RUST_LOG=debug sparmat multiply a.txt b.txt product.txt
//! ```
//!
//! Errors are reported on stderr and the process exits with status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sparmat::op::Operation;

/// Sparse matrix arithmetic over plain-text matrix files
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Operation to perform: add, subtract, or multiply
    operation: Operation,

    /// Path to the left-hand matrix file
    lhs: PathBuf,

    /// Path to the right-hand matrix file
    rhs: PathBuf,

    /// Path the serialized result is written to
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.operation.run_on_files(&cli.lhs, &cli.rhs, &cli.output) {
        Ok(result) => {
            println!(
                "{}: wrote {}x{} result ({} non-zeros) to {}",
                cli.operation,
                result.nrows(),
                result.ncols(),
                result.nnz(),
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
