//! Argument coercion for tool calls.
//!
//! Clients are loose about JSON types, so integers are accepted as JSON
//! integers, as floats without a fractional part, or as numeric strings.

use serde_json::Value;
use wt_core::{AnalysisError, Result, TextRange};

pub fn get_string<'a>(args: &'a Value, key: &str) -> Result<&'a str> {
    let v = args
        .get(key)
        .ok_or_else(|| AnalysisError::validation(format!("{} is required", key)))?;
    match v.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AnalysisError::validation(format!("{} must be string", key))),
    }
}

pub fn get_int(args: &Value, key: &str) -> Result<i64> {
    let v = args
        .get(key)
        .ok_or_else(|| AnalysisError::validation(format!("{} is required", key)))?;
    let must_be_integer = || AnalysisError::validation(format!("{} must be integer", key));
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() { return Ok(i); }
            match n.as_f64() {
                Some(f) if f.trunc() == f && f.abs() < i64::MAX as f64 => Ok(f as i64),
                _ => Err(must_be_integer()),
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(AnalysisError::validation(format!("{} must be number", key)));
            }
            s.parse::<i64>().map_err(|_| must_be_integer())
        }
        _ => Err(AnalysisError::validation(format!("{} must be number", key))),
    }
}

/// `start_line`/`end_line`, validated in that order.
pub fn get_range(args: &Value) -> Result<TextRange> {
    let start = get_int(args, "start_line")?;
    if start < 1 {
        return Err(AnalysisError::validation("start_line must be >= 1"));
    }
    let end = get_int(args, "end_line")?;
    TextRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn msg<T: std::fmt::Debug>(r: Result<T>) -> String {
        r.unwrap_err().to_string()
    }

    #[test]
    fn string_field() {
        let a = json!({"path": "novel.txt", "blank": "  ", "num": 3});
        assert_eq!(get_string(&a, "path").unwrap(), "novel.txt");
        assert_eq!(msg(get_string(&a, "missing")), "missing is required");
        assert_eq!(msg(get_string(&a, "blank")), "blank must be string");
        assert_eq!(msg(get_string(&a, "num")), "num must be string");
    }

    #[test]
    fn integer_forms() {
        let a = json!({"i": 12, "f": 12.0, "s": " 12 ", "frac": 1.5, "word": "twelve", "empty": "", "b": true});
        assert_eq!(get_int(&a, "i").unwrap(), 12);
        assert_eq!(get_int(&a, "f").unwrap(), 12);
        assert_eq!(get_int(&a, "s").unwrap(), 12);
        assert_eq!(msg(get_int(&a, "frac")), "frac must be integer");
        assert_eq!(msg(get_int(&a, "word")), "word must be integer");
        assert_eq!(msg(get_int(&a, "empty")), "empty must be number");
        assert_eq!(msg(get_int(&a, "b")), "b must be number");
        assert_eq!(msg(get_int(&a, "nothing")), "nothing is required");
    }

    #[test]
    fn range_validation_order() {
        // start is checked before end is even looked at
        assert_eq!(msg(get_range(&json!({"start_line": 0}))), "start_line must be >= 1");
        assert_eq!(msg(get_range(&json!({"start_line": 2}))), "end_line is required");
        assert_eq!(
            msg(get_range(&json!({"start_line": 5, "end_line": 4}))),
            "start_line must be <= end_line"
        );
        let r = get_range(&json!({"start_line": "3", "end_line": 7.0})).unwrap();
        assert_eq!((r.start_line(), r.end_line()), (3, 7));
    }
}
