//! Line-range extraction over any buffered reader.
//!
//! Only the current line is held in memory while scanning, so a manuscript
//! of any size can be sliced without reading it whole. There is no cap on
//! line length: a single 50 MB line is read like any other.

use crate::error::{AnalysisError, Result};
use crate::range::TextRange;
use std::io::BufRead;
use std::path::PathBuf;

/// Iterator over `(line_no, line)` pairs inside an optional range.
///
/// Lines are split on LF; a CR right before the LF (or at end of input) is
/// dropped with it. Lines before `start_line` are skipped without being
/// decoded, and no byte past `end_line` is read.
pub struct RangeLines<R> {
    reader: R,
    range: Option<TextRange>,
    source: PathBuf,
    buf: Vec<u8>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> RangeLines<R> {
    pub fn new(reader: R, range: Option<TextRange>) -> Self {
        Self {
            reader,
            range,
            source: PathBuf::new(),
            buf: Vec::new(),
            line_no: 0,
            done: false,
        }
    }

    /// Name the source so that errors point at it.
    pub fn labelled(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Number of lines consumed from the reader so far, in range or not.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    fn past_end(&self) -> bool {
        self.range
            .map(|r| self.line_no >= r.end_line())
            .unwrap_or(false)
    }

    fn before_start(&self) -> bool {
        self.range
            .map(|r| self.line_no < r.start_line())
            .unwrap_or(false)
    }
}

impl<R: BufRead> Iterator for RangeLines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done || self.past_end() {
                self.done = true;
                return None;
            }
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {}
                Err(source) => {
                    self.done = true;
                    return Some(Err(AnalysisError::Io {
                        path: self.source.clone(),
                        source,
                    }));
                }
            }
            self.line_no += 1;
            if self.before_start() {
                continue;
            }
            strip_terminator(&mut self.buf);
            let bytes = std::mem::take(&mut self.buf);
            return match String::from_utf8(bytes) {
                Ok(line) => Some(Ok((self.line_no, line))),
                Err(_) => {
                    self.done = true;
                    Some(Err(AnalysisError::Encoding {
                        path: self.source.clone(),
                        line: self.line_no,
                    }))
                }
            };
        }
    }
}

fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}

/// The requested lines joined back together, plus how many were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub lines: usize,
}

/// 指定範囲の行を連結して返す（各行の末尾に LF を一つ付ける）
///
/// `end_line` past the end of input just stops at EOF; `start_line` past the
/// end yields an empty result. Either way it is not an error.
pub fn extract_lines<R: BufRead>(reader: R, range: Option<TextRange>) -> Result<ExtractedText> {
    let mut out = ExtractedText::default();
    for item in RangeLines::new(reader, range) {
        let (_, line) = item?;
        out.text.push_str(&line);
        out.text.push('\n');
        out.lines += 1;
    }
    Ok(out)
}
