//! sparse-arith: command-line front end.
//!
//! Loads matrix files, applies one operation through the library API and
//! writes or prints the result.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sparse_arith::Operation;

#[derive(Parser)]
#[command(
    name = "sparse-arith",
    version,
    about = "Add, subtract or multiply sparse integer matrices stored as text files"
)]
struct Cli {
    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of the same shape
    Add(commands::arith::ArithArgs),

    /// Subtract the second matrix from the first
    Subtract(commands::arith::ArithArgs),

    /// Multiply the first matrix by the second
    Multiply(commands::arith::ArithArgs),

    /// Apply an operation chosen by name or menu number (1, 2, 3)
    Run(commands::arith::RunArgs),

    /// Print a matrix file in canonical form
    Show(commands::show::ShowArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("sparse-arith v{}", sparse_arith::VERSION);

    match cli.command {
        Commands::Add(args) => commands::arith::run(Operation::Add, args),
        Commands::Subtract(args) => commands::arith::run(Operation::Subtract, args),
        Commands::Multiply(args) => commands::arith::run(Operation::Multiply, args),
        Commands::Run(args) => commands::arith::run(args.operation, args.files),
        Commands::Show(args) => commands::show::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_accepts_menu_numbers_and_names() {
        let cli = Cli::try_parse_from(["sparse-arith", "run", "3", "a.txt", "b.txt"]).unwrap();
        match cli.command {
            Commands::Run(args) => assert_eq!(args.operation, Operation::Multiply),
            _ => panic!("expected run subcommand"),
        }

        let cli =
            Cli::try_parse_from(["sparse-arith", "-v", "run", "subtract", "a.txt", "b.txt"]).unwrap();
        match cli.command {
            Commands::Run(args) => assert_eq!(args.operation, Operation::Subtract),
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn test_run_rejects_unknown_operation() {
        assert!(Cli::try_parse_from(["sparse-arith", "run", "4", "a.txt", "b.txt"]).is_err());
    }
}
