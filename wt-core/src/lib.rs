//! Character counting and dialogue/narration analysis for plain-text
//! manuscripts.
//!
//! Every entry point is a plain function of its inputs: nothing is cached
//! between calls and no handle outlives the call that opened it.

pub mod analyze;
pub mod config;
pub mod count;
pub mod dialogue;
pub mod error;
pub mod lines;
pub mod range;
pub mod report;
pub mod timestamp;

pub use analyze::{classify_dialogue, count_characters, range_label};
pub use count::{count_chars, CountResult};
pub use dialogue::{classify, DialogueCounts, DialogueScanner, QUOTE_PAIRS};
pub use error::{AnalysisError, Result};
pub use lines::{extract_lines, ExtractedText, RangeLines};
pub use range::TextRange;
pub use report::ClassificationResult;
pub use timestamp::current_timestamp;
