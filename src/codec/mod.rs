// Text file codec for sparse matrices

pub mod file;
pub mod text;

pub use file::{load, save};
pub use text::{decode_lines, parse_matrix, render, write_matrix};
