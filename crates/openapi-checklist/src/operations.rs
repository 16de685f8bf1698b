//! Checklist extraction from a parsed document

use crate::error::{ChecklistError, ChecklistResult};
use crate::types::{Checklist, ChecklistItem};
use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

/// Walks the `paths` section of a parsed document
pub struct ChecklistExtractor;

impl ChecklistExtractor {
    /// Extract one checklist item per (path, operation) pair, in document order
    pub fn extract(document: &Value) -> ChecklistResult<Checklist> {
        if !document.is_mapping() {
            return Err(ChecklistError::invalid_structure(
                "document",
                "expected a mapping at the top level",
            ));
        }

        let paths = document
            .get("paths")
            .ok_or_else(|| ChecklistError::MissingField("paths".to_string()))?
            .as_mapping()
            .ok_or_else(|| ChecklistError::invalid_structure("paths", "expected a mapping of paths"))?;

        let mut items = Vec::new();

        for (path_key, methods) in paths {
            let path = Self::key_text(path_key, "paths")?;

            let methods = methods.as_mapping().ok_or_else(|| {
                ChecklistError::invalid_structure(
                    format!("paths.{}", path),
                    "expected a mapping of operations",
                )
            })?;

            debug!("Path {} has {} entries", path, methods.len());

            for (method_key, details) in methods {
                let method = Self::key_text(method_key, &format!("paths.{}", path))?;
                let summary = Self::extract_summary(&path, &method, details)?;
                items.push(ChecklistItem::new(path.clone(), method, summary));
            }
        }

        Ok(Checklist::new(items))
    }

    /// Read the `summary` of an operation.
    ///
    /// Entries that are not mappings (path-level `parameters`, `$ref` strings,
    /// empty values) carry no summary. A null summary counts as absent.
    fn extract_summary(path: &str, method: &str, details: &Value) -> ChecklistResult<Option<String>> {
        let Some(summary) = details.get("summary") else {
            return Ok(None);
        };

        Option::<String>::deserialize(summary.clone()).map_err(|e| ChecklistError::InvalidSummary {
            path: path.to_string(),
            method: method.to_string(),
            reason: e.to_string(),
        })
    }

    /// Render a mapping key as text; booleans and null use Python's `True`/`False`/`None`
    fn key_text(key: &Value, location: &str) -> ChecklistResult<String> {
        match key {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(true) => Ok("True".to_string()),
            Value::Bool(false) => Ok("False".to_string()),
            Value::Null => Ok("None".to_string()),
            Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => Err(
                ChecklistError::invalid_structure(location, "keys must be plain scalars"),
            ),
        }
    }
}
