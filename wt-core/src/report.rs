use crate::dialogue::DialogueCounts;

/// Dialogue/narration tallies with derived totals and ratios.
///
/// Only the two counts are stored; the total and both ratios are computed
/// on demand so they can never disagree with each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub dialogue_chars: usize,
    pub narration_chars: usize,
    /// Lines scanned to produce the counts.
    pub lines: usize,
}

impl ClassificationResult {
    pub fn new(counts: DialogueCounts, lines: usize) -> Self {
        Self {
            dialogue_chars: counts.dialogue,
            narration_chars: counts.narration,
            lines,
        }
    }

    pub fn total_chars(&self) -> usize {
        self.dialogue_chars + self.narration_chars
    }

    /// 0.0 when nothing was counted.
    pub fn dialogue_ratio(&self) -> f64 {
        ratio(self.dialogue_chars, self.total_chars())
    }

    /// 0.0 when nothing was counted.
    pub fn narration_ratio(&self) -> f64 {
        ratio(self.narration_chars, self.total_chars())
    }

    pub fn summary(&self, label: &str) -> String {
        format!(
            "{} dialogue={} narration={} dialogue_ratio={:.4} narration_ratio={:.4}",
            label,
            self.dialogue_chars,
            self.narration_chars,
            self.dialogue_ratio(),
            self.narration_ratio()
        )
    }

    /// Field set for programmatic callers. `lines` is included only for
    /// range scans.
    pub fn structured(&self, label: &str, with_lines: bool) -> serde_json::Value {
        let mut v = serde_json::json!({
            "path": label,
            "dialogue_chars": self.dialogue_chars,
            "narration_chars": self.narration_chars,
            "total_chars": self.total_chars(),
            "dialogue_ratio": self.dialogue_ratio(),
            "narration_ratio": self.narration_ratio(),
        });
        if with_lines {
            v["lines"] = serde_json::json!(self.lines);
        }
        v
    }
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
