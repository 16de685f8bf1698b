//! # openapi-checklist
//!
//! Reads an OpenAPI document and lists every (path, operation) pair as a
//! markdown checklist line, with the operation summary when present.

mod types;
mod parser;
mod operations;
mod summary;
mod error;

pub use types::*;
pub use parser::{render, run, ChecklistParser, DEFAULT_SPEC_FILE};
pub use operations::ChecklistExtractor;
pub use summary::{clean_summary, SUMMARY_MARKER};
pub use error::{ChecklistError, ChecklistResult, ErrorKind};
