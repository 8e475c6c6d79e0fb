//! Dialogue/narration classification by quote nesting.
//!
//! A single left-to-right scan keeps a stack of the closing marks it is
//! waiting for. Characters seen while the stack is non-empty are dialogue,
//! the rest narration. Quote marks themselves and line terminators are not
//! counted at all. Unbalanced input is fine: an opener that never closes
//! turns the rest of the text into dialogue, and a closer that does not
//! match the top of the stack is ordinary text.

use crate::count::is_line_terminator;

/// Opening mark → closing mark. Adding a quotation style means adding a row.
pub const QUOTE_PAIRS: &[(char, char)] = &[('「', '」'), ('『', '』')];

pub fn closer_for(opener: char) -> Option<char> {
    QUOTE_PAIRS
        .iter()
        .find(|(open, _)| *open == opener)
        .map(|(_, close)| *close)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogueCounts {
    pub dialogue: usize,
    pub narration: usize,
}

/// Streaming form of [`classify`]. Feeding text in pieces gives the same
/// counts as feeding the concatenation, so the stack survives line breaks.
#[derive(Debug, Default)]
pub struct DialogueScanner {
    pending: Vec<char>,
    counts: DialogueCounts,
}

impl DialogueScanner {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(8),
            counts: DialogueCounts::default(),
        }
    }

    pub fn feed(&mut self, text: &str) {
        for c in text.chars() {
            self.step(c);
        }
    }

    fn step(&mut self, c: char) {
        if is_line_terminator(c) {
            return;
        }
        if self.pending.last() == Some(&c) {
            self.pending.pop();
            return;
        }
        if let Some(close) = closer_for(c) {
            self.pending.push(close);
            return;
        }
        if self.pending.is_empty() {
            self.counts.narration += 1;
        } else {
            self.counts.dialogue += 1;
        }
    }

    /// Current nesting depth; non-zero after `finish` means an unclosed quote.
    pub fn depth(&self) -> usize {
        self.pending.len()
    }

    pub fn finish(self) -> DialogueCounts {
        if !self.pending.is_empty() {
            tracing::debug!(depth = self.pending.len(), "scan ended inside an open quote");
        }
        self.counts
    }
}

pub fn classify(text: &str) -> DialogueCounts {
    let mut scanner = DialogueScanner::new();
    scanner.feed(text);
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dn(text: &str) -> (usize, usize) {
        let c = classify(text);
        (c.dialogue, c.narration)
    }

    #[test]
    fn simple_quote() {
        assert_eq!(dn("「こんにちは」と彼は言った。"), (5, 7));
    }

    #[test]
    fn double_corner_inside_narration() {
        assert_eq!(dn("彼は『これは入れ子』だと思った。"), (6, 8));
    }

    #[test]
    fn nested_quotes_are_all_dialogue() {
        // 「母は『早く』と言った」
        assert_eq!(dn("「母は『早く』と言った」"), (8, 0));
    }

    #[test]
    fn same_kind_nesting_pushes_independently() {
        assert_eq!(dn("「a「b」c」d"), (3, 1));
    }

    #[test]
    fn unterminated_opener_runs_to_end() {
        assert_eq!(dn("「abc"), (3, 0));
        let mut s = DialogueScanner::new();
        s.feed("前「abc");
        assert_eq!(s.depth(), 1);
        assert_eq!(s.finish(), DialogueCounts { dialogue: 3, narration: 1 });
    }

    #[test]
    fn mismatched_closer_is_dialogue_text() {
        // 』 does not match the pending 」, so it is counted and does not pop.
        assert_eq!(dn("「a』b」c"), (3, 1));
    }

    #[test]
    fn stray_closer_outside_quotes_is_narration() {
        assert_eq!(dn("a」b"), (0, 3));
    }

    #[test]
    fn terminators_never_count_or_change_state() {
        assert_eq!(dn(""), (0, 0));
        assert_eq!(dn("\n\r\n"), (0, 0));
        assert_eq!(dn("「こん\r\nにち\nは」\nと"), dn("「こんにちは」と"));
    }

    #[test]
    fn streaming_matches_one_shot() {
        let text = "「一行目\n二行目」地の文\n『三』";
        let mut s = DialogueScanner::new();
        for line in text.split('\n') {
            s.feed(line);
        }
        assert_eq!(s.finish(), classify(text));
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let depth = 200_000;
        let text = format!("{}x{}", "「".repeat(depth), "」".repeat(depth));
        assert_eq!(dn(&text), (1, 0));
    }

    #[test]
    fn lookup_table() {
        assert_eq!(closer_for('「'), Some('」'));
        assert_eq!(closer_for('『'), Some('』'));
        assert_eq!(closer_for('」'), None);
        assert_eq!(closer_for('"'), None);
    }
}
