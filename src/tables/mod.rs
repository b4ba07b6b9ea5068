//! Tabular artifacts written and read by the pipeline.

pub mod reader;
pub mod writer;

pub use reader::CsvTable;
pub use writer::{write_comparisons, write_match_odds};
