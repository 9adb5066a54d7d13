//! Matrix File Workflow
//!
//! Demonstrates the full sparmat data flow:
//! - Writing matrix files in the plain-text triplet format
//! - Loading them into `SparseMatrix` instances
//! - Running add / subtract / multiply through `Operation`
//! - Serializing the results back to disk
//!
//! ```sh
//! cargo run --example file_workflow
//! ```

use sparmat::prelude::*;

fn main() -> Result<()> {
    let dir = std::env::temp_dir().join("sparmat_demo");
    std::fs::create_dir_all(&dir)?;

    // -----------------------------------------------------------------------
    // 1. Write two matrix files
    // -----------------------------------------------------------------------
    // A (2×3):            B (3×2):
    //   [ 1  0  2 ]         [ 1  0 ]
    //   [ 0  3  0 ]         [ 0  2 ]
    //                       [ 4  0 ]

    let a_path = dir.join("a.txt");
    let b_path = dir.join("b.txt");
    std::fs::write(&a_path, "rows=2\ncols=3\n(0, 0, 1)\n(0, 2, 2)\n(1, 1, 3)")?;
    std::fs::write(&b_path, "rows=3\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n(2, 0, 4)")?;

    // -----------------------------------------------------------------------
    // 2. Load and inspect
    // -----------------------------------------------------------------------
    let a = SparseMatrix::from_path(&a_path)?;
    let b = SparseMatrix::from_path(&b_path)?;
    println!(
        "loaded A ({}x{}, {} non-zeros) and B ({}x{}, {} non-zeros)",
        a.nrows(),
        a.ncols(),
        a.nnz(),
        b.nrows(),
        b.ncols(),
        b.nnz()
    );

    // -----------------------------------------------------------------------
    // 3. Multiply through the Operation dispatcher
    // -----------------------------------------------------------------------
    let product_path = dir.join("product.txt");
    let product = Operation::Multiply.run_on_files(&a_path, &b_path, &product_path)?;
    println!("A * B =\n{product}");

    // -----------------------------------------------------------------------
    // 4. Add and subtract need equal shapes; A + A works directly
    // -----------------------------------------------------------------------
    let doubled = a.add(&a)?;
    let cancelled = a.sub(&a)?;
    println!("A + A has {} non-zeros", doubled.nnz());
    println!("A - A has {} non-zeros", cancelled.nnz());

    // Incompatible shapes surface as a DimensionMismatch error
    match a.add(&b) {
        Err(err) => println!("A + B correctly fails: {err}"),
        Ok(_) => unreachable!("2x3 + 3x2 must not succeed"),
    }

    println!("results written under {}", dir.display());
    Ok(())
}
