//! Column inference: which headers carry region, time and value.

mod candidates;
mod columns;

pub use candidates::CandidateSet;
pub use columns::{ColumnInference, ColumnRoles, parse_numeric};
