//! Document loading and checklist rendering

use crate::error::{ChecklistError, ChecklistResult};
use crate::operations::ChecklistExtractor;
use crate::types::Checklist;
use serde_yaml::Value;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// File read when no input is given
pub const DEFAULT_SPEC_FILE: &str = "kinvest_prod.yaml";

/// Loads OpenAPI documents and turns them into checklists
pub struct ChecklistParser;

impl ChecklistParser {
    /// Parse a document from a string (auto-detects JSON/YAML).
    ///
    /// Content starting with `{` is tried as JSON first. A YAML flow mapping
    /// such as `{paths: {}}` is not JSON, so it falls back to YAML.
    pub fn parse(content: &str) -> ChecklistResult<Checklist> {
        if content.trim_start().starts_with('{') {
            match serde_json::from_str::<Value>(content) {
                Ok(document) => return ChecklistExtractor::extract(&document),
                Err(e) => debug!("Content is not JSON ({}), parsing as YAML", e),
            }
        }

        Self::parse_yaml(content)
    }

    /// Parse a document from YAML
    pub fn parse_yaml(content: &str) -> ChecklistResult<Checklist> {
        let document: Value = serde_yaml::from_str(content)?;
        ChecklistExtractor::extract(&document)
    }

    /// Parse a document from JSON
    pub fn parse_json(content: &str) -> ChecklistResult<Checklist> {
        let document: Value = serde_json::from_str(content)?;
        ChecklistExtractor::extract(&document)
    }

    /// Read and parse a document from disk
    pub fn from_file(path: impl AsRef<Path>) -> ChecklistResult<Checklist> {
        let path = path.as_ref();
        debug!("Reading OpenAPI document from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ChecklistError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let checklist = Self::parse(&content)?;
        info!(
            "Extracted {} checklist items from {}",
            checklist.len(),
            path.display()
        );

        Ok(checklist)
    }
}

/// Write each checklist line, newline-terminated, in order
pub fn render<W: Write>(checklist: &Checklist, writer: &mut W) -> std::io::Result<()> {
    for item in checklist {
        writeln!(writer, "{}", item)?;
    }
    writer.flush()
}

/// Load `path` and write its checklist to `writer`.
///
/// Returns the number of lines written.
pub fn run<W: Write>(path: impl AsRef<Path>, writer: &mut W) -> ChecklistResult<usize> {
    let checklist = ChecklistParser::from_file(path)?;
    render(&checklist, writer).map_err(ChecklistError::Output)?;
    Ok(checklist.len())
}
