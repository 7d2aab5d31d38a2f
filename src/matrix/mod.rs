// Matrix data structures and operations

pub mod arithmetic;
pub mod conversion;
pub mod coordinate;
pub mod element;
pub mod multiply;
pub mod operation;
pub mod sparse;

pub use coordinate::Coordinate;
pub use element::Element;
pub use operation::Operation;
pub use sparse::SparseMatrix;
