//! Input loading and the in-memory tabular dataset.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{SourceMetadata, TabularDataset};
