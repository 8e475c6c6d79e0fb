use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wt_core::{classify_dialogue, count_chars, count_characters, AnalysisError, TextRange};

fn write(dir: &TempDir, name: &str, body: &[u8]) -> PathBuf {
    let p = dir.path().join(name);
    fs::write(&p, body).unwrap();
    p
}

fn range(a: i64, b: i64) -> Option<TextRange> {
    Some(TextRange::new(a, b).unwrap())
}

fn ten_lines() -> String {
    (1..=10).map(|i| format!("第{i}行「台詞{i}」地の文\n")).collect()
}

#[test]
fn scenario_quote_then_narration() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "a.txt", "「こんにちは」と彼は言った。".as_bytes());
    let r = classify_dialogue(&p, None).unwrap();
    assert_eq!(r.dialogue_chars, 5);
    assert_eq!(r.narration_chars, 7);
    assert_eq!(r.total_chars(), 12);
}

#[test]
fn scenario_double_corner_inside_narration() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "b.txt", "彼は『これは入れ子』だと思った。".as_bytes());
    let r = classify_dialogue(&p, None).unwrap();
    assert_eq!(r.dialogue_chars, "これは入れ子".chars().count());
    assert_eq!(r.narration_chars, "彼はだと思った。".chars().count());
}

#[test]
fn scenario_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "empty.txt", b"");
    let c = count_characters(&p, None).unwrap();
    assert_eq!((c.characters, c.lines), (0, 0));
    let r = classify_dialogue(&p, None).unwrap();
    assert_eq!((r.dialogue_chars, r.narration_chars), (0, 0));
    assert_eq!(r.dialogue_ratio(), 0.0);
    assert_eq!(r.narration_ratio(), 0.0);
}

#[test]
fn scenario_end_line_past_eof() {
    let dir = tempfile::tempdir().unwrap();
    let body = ten_lines();
    let p = write(&dir, "ten.txt", body.as_bytes());
    let c = count_characters(&p, range(3, 100)).unwrap();
    assert_eq!(c.lines, 8);
    let expected: usize = body.lines().skip(2).map(count_chars).sum();
    assert_eq!(c.characters, expected);
}

#[test]
fn scenario_unterminated_opener() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "e.txt", "「abc".as_bytes());
    let r = classify_dialogue(&p, None).unwrap();
    assert_eq!((r.dialogue_chars, r.narration_chars), (3, 0));
}

#[test]
fn start_line_past_eof_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "ten.txt", ten_lines().as_bytes());
    let c = count_characters(&p, range(11, 20)).unwrap();
    assert_eq!((c.characters, c.lines), (0, 0));
    let r = classify_dialogue(&p, range(11, 20)).unwrap();
    assert_eq!(r.total_chars(), 0);
    assert_eq!(r.lines, 0);
}

#[test]
fn whole_file_equals_unbounded_range() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "ten.txt", ten_lines().as_bytes());
    assert_eq!(
        count_characters(&p, None).unwrap(),
        count_characters(&p, range(1, i64::MAX)).unwrap()
    );
    assert_eq!(
        classify_dialogue(&p, None).unwrap(),
        classify_dialogue(&p, range(1, 10)).unwrap()
    );
}

#[test]
fn range_line_counts_are_monotonic() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "ten.txt", ten_lines().as_bytes());
    let outer = count_characters(&p, range(2, 9)).unwrap();
    for (a, b) in [(2, 9), (3, 8), (5, 5), (2, 2), (9, 9)] {
        let inner = count_characters(&p, range(a, b)).unwrap();
        assert!(inner.lines <= outer.lines);
        assert!(inner.characters <= outer.characters);
    }
}

#[test]
fn line_terminators_do_not_change_counts() {
    let dir = tempfile::tempdir().unwrap();
    let lf = write(&dir, "lf.txt", "「一」二\n三「四\n五」六".as_bytes());
    let crlf = write(&dir, "crlf.txt", "「一」二\r\n\r\n三「四\r\n\n五」六\r\n".as_bytes());
    let flat = write(&dir, "flat.txt", "「一」二三「四五」六".as_bytes());

    let expected = classify_dialogue(&flat, None).unwrap();
    for p in [&lf, &crlf] {
        let r = classify_dialogue(p, None).unwrap();
        assert_eq!(r.dialogue_chars, expected.dialogue_chars);
        assert_eq!(r.narration_chars, expected.narration_chars);
        assert_eq!(
            count_characters(p, None).unwrap().characters,
            count_characters(&flat, None).unwrap().characters
        );
    }
}

#[test]
fn quote_spanning_lines_inside_range() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "span.txt", "地\n「台\n詞」\n地".as_bytes());
    let r = classify_dialogue(&p, range(2, 3)).unwrap();
    assert_eq!((r.dialogue_chars, r.narration_chars, r.lines), (2, 0, 2));
}

#[test]
fn classification_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "ten.txt", ten_lines().as_bytes());
    let first = classify_dialogue(&p, range(2, 7)).unwrap();
    let second = classify_dialogue(&p, range(2, 7)).unwrap();
    assert_eq!(first, second);
    assert!((first.dialogue_ratio() + first.narration_ratio() - 1.0).abs() < 1e-9);
}

#[test]
fn invalid_utf8_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(&dir, "bad.txt", b"ok\n\xe3\x81\n");
    let err = count_characters(&p, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Encoding { line: 2, .. }));
    // line 2 is outside the range, so it is never decoded
    assert_eq!(count_characters(&p, range(1, 1)).unwrap().characters, 2);
}
