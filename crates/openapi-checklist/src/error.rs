//! Error types for the checklist extractor

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for checklist operations
pub type ChecklistResult<T> = std::result::Result<T, ChecklistError>;

/// Broad failure categories reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input file missing, unreadable or permission-denied
    FileAccess,
    /// Content is not valid YAML/JSON, or a field has the wrong type
    Parse,
    /// `paths` is absent or not a mapping of mappings
    MissingKey,
    /// Writing the checklist failed
    Output,
}

/// Checklist error types
#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid summary for {path} ({method}): {reason}")]
    InvalidSummary {
        path: String,
        method: String,
        reason: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid document structure at {location}: {reason}")]
    InvalidStructure { location: String, reason: String },

    #[error("Failed to write checklist: {0}")]
    Output(#[source] std::io::Error),
}

impl ChecklistError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChecklistError::FileAccess { .. } => ErrorKind::FileAccess,
            ChecklistError::Yaml(_)
            | ChecklistError::Json(_)
            | ChecklistError::InvalidSummary { .. } => ErrorKind::Parse,
            ChecklistError::MissingField(_) | ChecklistError::InvalidStructure { .. } => {
                ErrorKind::MissingKey
            }
            ChecklistError::Output(_) => ErrorKind::Output,
        }
    }

    pub(crate) fn invalid_structure(location: impl Into<String>, reason: impl Into<String>) -> Self {
        ChecklistError::InvalidStructure {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
