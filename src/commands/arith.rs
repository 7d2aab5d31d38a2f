//! Binary operations on two matrix files.
//!
//! sparse-arith add first.txt second.txt [--output result.txt | --output-dir DIR]
//! sparse-arith run 2 first.txt second.txt

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use sparse_arith::{Operation, SparseMatrix};

#[derive(Args)]
pub struct ArithArgs {
    /// First (left) matrix file
    first: PathBuf,

    /// Second (right) matrix file
    second: PathBuf,

    /// Result file; overrides --output-dir
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the generated result file [default: `outputs` next to the first input]
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Operation: add, subtract, multiply, or menu number 1, 2, 3
    pub operation: Operation,

    #[command(flatten)]
    pub files: ArithArgs,
}

pub fn run(op: Operation, args: ArithArgs) -> Result<()> {
    info!("=== {} ===", op);

    let a = SparseMatrix::<i64>::load(&args.first)
        .with_context(|| format!("Failed to load {}", args.first.display()))?;
    let b = SparseMatrix::<i64>::load(&args.second)
        .with_context(|| format!("Failed to load {}", args.second.display()))?;
    info!(
        "Loaded {}x{} ({} nnz) and {}x{} ({} nnz)",
        a.n_rows(),
        a.n_cols(),
        a.nnz(),
        b.n_rows(),
        b.n_cols(),
        b.nnz()
    );

    let result = op
        .apply(&a, &b)
        .with_context(|| format!("{} failed", op))?;

    let output = match args.output {
        Some(path) => path,
        None => {
            let dir = args
                .output_dir
                .clone()
                .unwrap_or_else(|| default_output_dir(&args.first));
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            dir.join(output_file_name(op, &args.first, &args.second))
        }
    };

    result
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Result: {}x{}, {} nnz", result.n_rows(), result.n_cols(), result.nnz());
    println!("Operation completed successfully. Results saved to: {}", output.display());
    Ok(())
}

/// `outputs/` next to the first input file
fn default_output_dir(first: &Path) -> PathBuf {
    first
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("outputs")
}

/// Result file name derived from the operation and the input file stems
fn output_file_name(op: Operation, first: &Path, second: &Path) -> String {
    let a = stem(first);
    let b = stem(second);
    match op {
        Operation::Add => format!("Addition of {} and {}.txt", a, b),
        Operation::Subtract => format!("Subtraction of {} from {}.txt", b, a),
        Operation::Multiply => format!("Multiplication of {} and {}.txt", a, b),
    }
}

/// File name up to its first dot
fn stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}
