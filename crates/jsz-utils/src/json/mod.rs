//! JSON text codec guarded against falsy input.
//!
//! A falsy argument is a validation failure: it goes to the sink and the
//! sink's value is returned as `Ok`. Malformed JSON text is returned as
//! [`UtilsError::Json`].

mod decoder;
mod encoder;

pub use decoder::decode;
pub use encoder::JsonEncoder;

use crate::coerce::{is_truthy, to_str};
use crate::error::UtilsError;
use crate::sink::{Sink, TracingSink};
use crate::types::JsValue;

pub const PARSE_NO_VALUE: &str = "Error: parseJSON, no value";
pub const STRINGIFY_NO_VALUE: &str = "Error: stringifyJSON, no value";

/// Parses the string form of a value as JSON text.
///
/// Number literals beyond the range of a double parse to infinity, and
/// nesting depth is not limited.
///
/// # Examples
///
/// ```
/// use jsz_utils::{parse_json, JsValue};
/// use serde_json::json;
///
/// let parsed = parse_json(&JsValue::from(r#"{"a":1}"#)).unwrap();
/// assert_eq!(parsed, JsValue::from(json!({"a": 1})));
///
/// // Falsy input is reported, not raised.
/// assert_eq!(parse_json(&JsValue::from("")).unwrap(), JsValue::Undefined);
/// assert!(parse_json(&JsValue::from("{oops")).is_err());
/// ```
pub fn parse_json(value: &JsValue) -> Result<JsValue, UtilsError> {
    parse_json_with(value, &TracingSink)
}

pub fn parse_json_with(value: &JsValue, sink: &dyn Sink) -> Result<JsValue, UtilsError> {
    if !is_truthy(value) {
        return Ok(sink.error(PARSE_NO_VALUE));
    }
    decode(&to_str(value)).map_err(UtilsError::from)
}

/// Serializes a value to JSON text.
///
/// Returns a string value, or `undefined` for a symbol. Bigints cannot be
/// serialized.
pub fn stringify_json(value: &JsValue) -> Result<JsValue, UtilsError> {
    stringify_json_with(value, &TracingSink)
}

pub fn stringify_json_with(value: &JsValue, sink: &dyn Sink) -> Result<JsValue, UtilsError> {
    if !is_truthy(value) {
        return Ok(sink.error(STRINGIFY_NO_VALUE));
    }
    match value {
        JsValue::Json(v) => Ok(JsValue::from(JsonEncoder::new().encode(v))),
        JsValue::NonFinite(n) => Ok(JsValue::from(JsonEncoder::new().encode_float(*n))),
        JsValue::BigInt(_) => Err(UtilsError::Type("Do not know how to serialize a BigInt".to_string())),
        JsValue::Symbol(_) | JsValue::Undefined => Ok(JsValue::Undefined),
    }
}
