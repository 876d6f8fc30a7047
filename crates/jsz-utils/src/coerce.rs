//! Coercions between value categories, following the host's conversion rules.

use crate::error::UtilsError;
use crate::types::JsValue;
use serde_json::{Number, Value};
use std::sync::OnceLock;

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Largest length an array may have.
const MAX_ARRAY_LENGTH: f64 = 4_294_967_295.0;

/// Returns true if a value is truthy.
pub fn is_truthy(value: &JsValue) -> bool {
    match value {
        JsValue::Undefined => false,
        JsValue::NonFinite(n) => !n.is_nan(),
        JsValue::BigInt(n) => *n != 0,
        JsValue::Symbol(_) => true,
        JsValue::Json(v) => match v {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        },
    }
}

/// Converts a value to a number, like unary `+val`.
///
/// Non-numeric strings and plain objects produce `NaN`. Arrays convert via
/// their string form, so `[5]` becomes `5` and `[1, 2]` becomes `NaN`.
/// Bigints and symbols refuse the conversion.
///
/// # Examples
///
/// ```
/// use jsz_utils::{to_int, JsValue};
///
/// assert_eq!(to_int(&JsValue::from("42")).unwrap(), 42.0);
/// assert_eq!(to_int(&JsValue::from(" 0x1f ")).unwrap(), 31.0);
/// assert!(to_int(&JsValue::from("4 2")).unwrap().is_nan());
/// ```
pub fn to_int(value: &JsValue) -> Result<f64, UtilsError> {
    let n = match value {
        JsValue::Undefined => f64::NAN,
        JsValue::NonFinite(n) => *n,
        JsValue::BigInt(_) => {
            return Err(UtilsError::Type("Cannot convert a BigInt value to a number".to_string()))
        }
        JsValue::Symbol(_) => {
            return Err(UtilsError::Type("Cannot convert a Symbol value to a number".to_string()))
        }
        JsValue::Json(v) => value_to_number(v),
    };
    Ok(n)
}

pub(crate) fn value_to_number(v: &Value) -> f64 {
    match v {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(_) => string_to_number(&value_to_string(v)),
        Value::Object(_) => f64::NAN,
    }
}

fn decimal_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex::Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("decimal literal pattern is valid")
    })
}

/// Regex class body matching the same characters as [`is_js_whitespace`].
pub(crate) const JS_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Host whitespace: `WhiteSpace` plus `LineTerminator`.
pub(crate) fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parses a string the way `Number(str)` does.
pub fn string_to_number(s: &str) -> f64 {
    let t = s.trim_matches(is_js_whitespace);
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let bytes = t.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix(&t[2..], radix);
        }
    }
    if !decimal_regex().is_match(t) {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    let mut n = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => n = n * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    n
}

/// Converts a value to its string form, like `String(val)`.
///
/// # Examples
///
/// ```
/// use jsz_utils::{to_str, JsValue};
/// use serde_json::json;
///
/// assert_eq!(to_str(&JsValue::NULL), "null");
/// assert_eq!(to_str(&JsValue::Undefined), "undefined");
/// assert_eq!(to_str(&JsValue::from(42)), "42");
/// assert_eq!(to_str(&JsValue::from(json!([1, [2, 3], null]))), "1,2,3,");
/// assert_eq!(to_str(&JsValue::from(json!({"a": 1}))), "[object Object]");
/// ```
pub fn to_str(value: &JsValue) -> String {
    match value {
        JsValue::Undefined => "undefined".to_string(),
        JsValue::NonFinite(n) => number_to_string(*n),
        JsValue::BigInt(n) => n.to_string(),
        JsValue::Symbol(desc) => format!("Symbol({})", desc.as_deref().unwrap_or("")),
        JsValue::Json(v) => value_to_string(v),
    }
}

pub(crate) fn value_to_string(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => json_number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                _ => value_to_string(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

pub(crate) fn json_number_to_string(n: &Number) -> String {
    match n.as_i64() {
        Some(i) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&i) => i.to_string(),
        _ => number_to_string(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Formats a double the way `Number.prototype.toString()` does.
///
/// Whole numbers print without a fraction, and exponent notation is used
/// from `1e21` upwards and below `1e-6`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == f64::INFINITY {
        return "Infinity".to_string();
    }
    if n == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    // Shortest round-trip digits, e.g. "1.2345e-7".
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let e = point - 1;
        let e_sign = if e < 0 { "-" } else { "+" };
        if k == 1 {
            format!("{}e{}{}", digits, e_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", &digits[..1], &digits[1..], e_sign, e.abs())
        }
    };
    format!("{}{}", sign, body)
}

/// Builds an array from a value, like `Array.from(val)`.
///
/// Strings split into code points, arrays are copied, and objects with a
/// `length` property are read as array-likes. Anything else yields an
/// empty array, except `null` and `undefined` which are rejected.
pub fn to_array(value: &JsValue) -> Result<Vec<JsValue>, UtilsError> {
    match value {
        JsValue::Undefined => Err(UtilsError::Type("undefined is not iterable".to_string())),
        JsValue::Json(Value::Null) => Err(UtilsError::Type("object null is not iterable".to_string())),
        JsValue::Json(Value::String(s)) => Ok(s.chars().map(|c| JsValue::from(c.to_string())).collect()),
        JsValue::Json(Value::Array(items)) => Ok(items.iter().cloned().map(JsValue::Json).collect()),
        JsValue::Json(Value::Object(obj)) => {
            let len = match obj.get("length") {
                Some(length) => to_length(&JsValue::Json(length.clone()))?,
                None => 0,
            };
            Ok((0..len)
                .map(|i| obj.get(&i.to_string()).cloned().map(JsValue::Json).unwrap_or(JsValue::Undefined))
                .collect())
        }
        _ => Ok(Vec::new()),
    }
}

fn to_length(value: &JsValue) -> Result<usize, UtilsError> {
    let n = to_int(value)?;
    if n.is_nan() || n <= 0.0 {
        return Ok(0);
    }
    let n = n.trunc();
    if n > MAX_ARRAY_LENGTH {
        return Err(UtilsError::Range("Invalid array length".to_string()));
    }
    Ok(n as usize)
}
