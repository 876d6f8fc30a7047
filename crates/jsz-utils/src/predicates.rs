//! Type predicates.
//!
//! Every predicate is total over [`JsValue`] and answers with a plain `bool`.

use crate::coerce::is_truthy;
use crate::types::{JsType, JsValue};
use serde_json::Value;

/// Returns the category of a value.
///
/// Arrays report [`JsType::Array`]; everything else reports its `typeof`
/// category, so `null` is an [`JsType::Object`].
///
/// # Examples
///
/// ```
/// use jsz_utils::{get_type, JsType, JsValue};
/// use serde_json::json;
///
/// assert_eq!(get_type(&JsValue::from(json!([1, 2]))), JsType::Array);
/// assert_eq!(get_type(&JsValue::from(json!({}))), JsType::Object);
/// assert_eq!(get_type(&JsValue::NULL), JsType::Object);
/// assert_eq!(get_type(&JsValue::Undefined).as_str(), "undefined");
/// ```
pub fn get_type(value: &JsValue) -> JsType {
    if is_array(value) {
        return JsType::Array;
    }
    match value {
        JsValue::Undefined => JsType::Undefined,
        JsValue::NonFinite(_) => JsType::Number,
        JsValue::BigInt(_) => JsType::BigInt,
        JsValue::Symbol(_) => JsType::Symbol,
        JsValue::Json(v) => match v {
            Value::Null | Value::Object(_) | Value::Array(_) => JsType::Object,
            Value::Bool(_) => JsType::Boolean,
            Value::Number(_) => JsType::Number,
            Value::String(_) => JsType::String,
        },
    }
}

/// Returns true for numbers that are finite and have no fractional part.
pub fn is_int(value: &JsValue) -> bool {
    match value {
        JsValue::Json(Value::Number(n)) => {
            if n.is_i64() || n.is_u64() {
                return true;
            }
            n.as_f64().map(|f| f.is_finite() && f.fract() == 0.0).unwrap_or(false)
        }
        _ => false,
    }
}

pub fn is_str(value: &JsValue) -> bool {
    get_type(value) == JsType::String
}

pub fn is_array(value: &JsValue) -> bool {
    matches!(value, JsValue::Json(Value::Array(_)))
}

/// Returns true when [`get_type`] reports `object`, which includes `null`.
pub fn is_object(value: &JsValue) -> bool {
    get_type(value) == JsType::Object
}

pub fn is_null(value: &JsValue) -> bool {
    matches!(value, JsValue::Json(Value::Null))
}

pub fn is_undefined(value: &JsValue) -> bool {
    matches!(value, JsValue::Undefined)
}

/// Always returns `true`.
pub fn to_true(_value: &JsValue) -> bool {
    true
}

/// Returns `false` for the literal `false`, otherwise the negated
/// truthiness of the value.
///
/// ```
/// use jsz_utils::{to_false, JsValue};
///
/// assert!(!to_false(&JsValue::from(false)));
/// assert!(!to_false(&JsValue::from(1)));
/// assert!(to_false(&JsValue::from(0)));
/// ```
pub fn to_false(value: &JsValue) -> bool {
    match value {
        JsValue::Json(Value::Bool(false)) => false,
        _ => !is_truthy(value),
    }
}
