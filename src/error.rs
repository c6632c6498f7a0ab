//! Error types for loading pedigree documents and emitting views.
//!
//! Engine passes never fail; only the document boundary and JSON output do.

use std::fmt;

/// Errors surfaced at the document / serialization boundary.
#[derive(Debug)]
pub enum PedigreeError {
    /// Reading the input document failed.
    Io(std::io::Error),

    /// The input document is not valid JSON or is missing
    /// `varieties` / `nodes` / `edges`.
    Document(serde_json::Error),

    /// Writing a view or composition as JSON failed.
    Serialize(serde_json::Error),
}

impl fmt::Display for PedigreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PedigreeError::Io(e) => write!(f, "cannot read pedigree document: {}", e),
            PedigreeError::Document(e) => write!(f, "malformed pedigree document: {}", e),
            PedigreeError::Serialize(e) => write!(f, "cannot serialize output: {}", e),
        }
    }
}

impl std::error::Error for PedigreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PedigreeError::Io(e) => Some(e),
            PedigreeError::Document(e) | PedigreeError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PedigreeError {
    fn from(e: std::io::Error) -> Self {
        PedigreeError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, PedigreeError>;
