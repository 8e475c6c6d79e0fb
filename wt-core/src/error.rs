//! Error types shared by every analysis entry point.

use std::path::PathBuf;
use thiserror::Error;

/// Failures an analysis call can report. Every variant is fatal for the call
/// that produced it; no partial counts are returned alongside an error.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Bad caller input (missing field, wrong type, inverted range, ...)
    #[error("{0}")]
    Validation(String),

    /// The file could not be opened or a read failed part way through
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An in-range line is not valid UTF-8
    #[error("{}: line {line} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf, line: usize },
}

impl AnalysisError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AnalysisError::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
