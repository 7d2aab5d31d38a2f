//! Print a matrix file to stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use sparse_arith::{write_matrix, SparseMatrix};

#[derive(Args)]
pub struct ShowArgs {
    /// Matrix file to display
    path: PathBuf,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let matrix = SparseMatrix::<i64>::load(&args.path)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_matrix(&matrix, &mut out)?;
    out.flush()?;
    Ok(())
}
