//! JSON text decoding with the host's `JSON.parse` limits.
//!
//! Nesting depth is unbounded, and number literals too large for a double
//! decode to infinity instead of failing. A top-level one becomes
//! [`JsValue::NonFinite`]; inside an array or object it becomes `null`, since
//! JSON containers cannot hold non-finite numbers.

use crate::types::JsValue;
use serde::Deserialize;
use serde_json::Value;
use std::ops::Range;

const JSON_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

pub fn decode(text: &str) -> Result<JsValue, serde_json::Error> {
    let overflowing = overflowing_numbers(text);
    if overflowing.is_empty() {
        return parse(text).map(JsValue::Json);
    }
    if let [range] = overflowing.as_slice() {
        let before = text[..range.start].trim_matches(JSON_WHITESPACE);
        let after = text[range.end..].trim_matches(JSON_WHITESPACE);
        if before.is_empty() && after.is_empty() {
            let n = text[range.clone()].parse::<f64>().unwrap_or(f64::INFINITY);
            return Ok(JsValue::NonFinite(n));
        }
    }
    let mut patched = String::with_capacity(text.len());
    let mut last = 0;
    for range in &overflowing {
        patched.push_str(&text[last..range.start]);
        patched.push_str("null");
        last = range.end;
    }
    patched.push_str(&text[last..]);
    parse(&patched).map(JsValue::Json)
}

fn parse(text: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Byte ranges of number literals outside strings whose value overflows a
/// double.
fn overflowing_numbers(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut in_string = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            match b {
                b'\\' => i += 1,
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }
        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }
        if b == b'-' || b.is_ascii_digit() {
            let start = i;
            while i < bytes.len() && matches!(bytes[i], b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E') {
                i += 1;
            }
            if let Ok(n) = text[start..i].parse::<f64>() {
                if n.is_infinite() {
                    ranges.push(start..i);
                }
            }
            continue;
        }
        i += 1;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text() {
        assert_eq!(decode(r#"{"a": [1, "x"]}"#).unwrap(), JsValue::from(json!({"a": [1, "x"]})));
    }

    #[test]
    fn test_top_level_overflow_is_infinite() {
        assert_eq!(decode("1e400").unwrap(), JsValue::NonFinite(f64::INFINITY));
        assert_eq!(decode(" -1e400\n").unwrap(), JsValue::NonFinite(f64::NEG_INFINITY));
        let long = format!("1{}", "0".repeat(400));
        assert_eq!(decode(&long).unwrap(), JsValue::NonFinite(f64::INFINITY));
    }

    #[test]
    fn test_nested_overflow_is_null() {
        assert_eq!(decode("[1e400, 2, -1E999]").unwrap(), JsValue::from(json!([null, 2, null])));
        assert_eq!(decode(r#"{"big": 1e400}"#).unwrap(), JsValue::from(json!({"big": null})));
    }

    #[test]
    fn test_number_text_inside_strings_is_untouched() {
        assert_eq!(decode(r#"["1e400", "a\"1e400"]"#).unwrap(), JsValue::from(json!(["1e400", "a\"1e400"])));
    }

    #[test]
    fn test_underflow_is_zero() {
        assert_eq!(decode("1e-400").unwrap(), JsValue::from(0));
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 300;
        let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        let mut value = decode(&text).unwrap().into_json();
        let mut seen = 0;
        while let Value::Array(mut items) = value {
            seen += 1;
            value = items.pop().unwrap_or(Value::Null);
        }
        assert_eq!(seen, depth);
    }

    #[test]
    fn test_malformed_still_fails() {
        assert!(decode("1e400x").is_err());
        assert!(decode("[1e400").is_err());
        assert!(decode("{").is_err());
        assert!(decode("1 2").is_err());
    }
}
