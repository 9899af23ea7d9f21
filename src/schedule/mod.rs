//! Schedule ingestion: parsing raw tabular text and building the range index

pub mod index;
pub mod parser;

pub use index::*;
pub use parser::*;
