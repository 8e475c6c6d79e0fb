//! File-level operations: open, stream the requested lines, tally.
//!
//! The file handle lives only for the duration of one call and is dropped
//! on every exit path, including early exit once the range is exhausted.

use crate::count::CountResult;
use crate::dialogue::DialogueScanner;
use crate::error::{AnalysisError, Result};
use crate::lines::RangeLines;
use crate::range::TextRange;
use crate::report::ClassificationResult;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

fn open_lines(path: &Path, range: Option<TextRange>) -> Result<RangeLines<BufReader<File>>> {
    let f = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?range, "opened");
    Ok(RangeLines::new(BufReader::new(f), range).labelled(path))
}

/// Characters (LF/CR excluded) and lines in the range, or the whole file.
pub fn count_characters(path: impl AsRef<Path>, range: Option<TextRange>) -> Result<CountResult> {
    let path = path.as_ref();
    let mut out = CountResult::default();
    for item in open_lines(path, range)? {
        let (_, line) = item?;
        out.add_line(&line);
    }
    debug!(path = %path.display(), characters = out.characters, lines = out.lines, "counted");
    Ok(out)
}

/// Dialogue/narration split for the range, or the whole file. Quote state
/// carries across line breaks.
pub fn classify_dialogue(
    path: impl AsRef<Path>,
    range: Option<TextRange>,
) -> Result<ClassificationResult> {
    let path = path.as_ref();
    let mut scanner = DialogueScanner::new();
    let mut lines = 0usize;
    for item in open_lines(path, range)? {
        let (_, line) = item?;
        scanner.feed(&line);
        lines += 1;
    }
    let result = ClassificationResult::new(scanner.finish(), lines);
    debug!(
        path = %path.display(),
        dialogue = result.dialogue_chars,
        narration = result.narration_chars,
        lines,
        "classified"
    );
    Ok(result)
}

/// `<path>` or `<path>:<start>-<end>`, the label used in summaries.
pub fn range_label(path: &str, range: Option<TextRange>) -> String {
    match range {
        Some(r) => format!("{}:{}", path, r),
        None => path.to_string(),
    }
}
