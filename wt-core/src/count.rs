use serde::Serialize;

use crate::range::TextRange;

/// LF and CR never count as characters anywhere in this crate.
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Unicode scalar values in `text`, excluding LF and CR.
///
/// No normalization happens: a precomposed kana and its decomposed form
/// count differently, exactly as stored.
pub fn count_chars(text: &str) -> usize {
    text.chars().filter(|&c| !is_line_terminator(c)).count()
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountResult {
    pub characters: usize,
    pub lines: usize,
}

impl CountResult {
    /// Adds one already-split line.
    pub fn add_line(&mut self, line: &str) {
        self.characters += count_chars(line);
        self.lines += 1;
    }

    /// `"<path>: <count>"`, or `"<path>:<s>-<e> characters=<c> lines=<l>"` for a range.
    pub fn summary(&self, path: &str, range: Option<TextRange>) -> String {
        match range {
            None => format!("{}: {}", path, self.characters),
            Some(r) => format!(
                "{}:{} characters={} lines={}",
                path, r, self.characters, self.lines
            ),
        }
    }

    /// Structured fields for programmatic callers.
    pub fn structured(&self, path: &str, range: Option<TextRange>) -> serde_json::Value {
        match range {
            None => serde_json::json!({ "path": path, "character_count": self.characters }),
            Some(_) => serde_json::json!({ "characters": self.characters, "lines": self.lines }),
        }
    }
}
