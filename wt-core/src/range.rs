use crate::error::{AnalysisError, Result};
use serde::Serialize;
use std::fmt;

/// Inclusive, 1-based line window.
///
/// Construction goes through [`TextRange::new`], so a value of this type
/// always satisfies `1 <= start_line <= end_line`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    start_line: usize,
    end_line: usize,
}

impl TextRange {
    /// Inverted ranges are rejected, never swapped.
    pub fn new(start_line: i64, end_line: i64) -> Result<Self> {
        if start_line < 1 {
            return Err(AnalysisError::validation("start_line must be >= 1"));
        }
        if start_line > end_line {
            return Err(AnalysisError::validation("start_line must be <= end_line"));
        }
        Ok(Self {
            start_line: start_line as usize,
            end_line: end_line as usize,
        })
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn end_line(&self) -> usize {
        self.end_line
    }

    pub fn contains(&self, line_no: usize) -> bool {
        line_no >= self.start_line && line_no <= self.end_line
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_line, self.end_line)
    }
}
