use serde_json::{Number, Value};
use std::fmt;

/// Represents any value the helpers accept, including `undefined` and the
/// numbers and primitives JSON has no encoding for.
#[derive(Debug, Clone, Default)]
pub enum JsValue {
    /// JavaScript `undefined`.
    #[default]
    Undefined,
    /// Any JSON-compatible value: null, booleans, finite numbers, strings,
    /// arrays and objects.
    Json(Value),
    /// `NaN`, `Infinity` or `-Infinity`.
    NonFinite(f64),
    /// A `bigint` primitive.
    BigInt(i128),
    /// A `symbol` primitive with its optional description.
    Symbol(Option<String>),
}

impl JsValue {
    /// `null`.
    pub const NULL: JsValue = JsValue::Json(Value::Null);

    /// Returns the wrapped JSON value, if any.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            JsValue::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Unwraps into a JSON value. Values without a JSON encoding become `null`.
    pub fn into_json(self) -> Value {
        match self {
            JsValue::Json(v) => v,
            _ => Value::Null,
        }
    }
}

/// Equality of two JSON values as the host sees them: numbers compare by
/// value, so `1` and `1.0` are equal; object key order is ignored.
pub fn js_value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| js_value_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| js_value_eq(x, y)))
        }
        _ => a == b,
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Json(a), JsValue::Json(b)) => js_value_eq(a, b),
            (JsValue::NonFinite(a), JsValue::NonFinite(b)) => a == b,
            (JsValue::BigInt(a), JsValue::BigInt(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (JsValue::Undefined, JsValue::Undefined) => true,
            _ => false,
        }
    }
}

impl From<Value> for JsValue {
    fn from(v: Value) -> Self {
        JsValue::Json(v)
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Json(Value::Bool(b))
    }
}

/// Finite doubles are JSON numbers; `NaN` and the infinities are not.
impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n)
            .map(|num| JsValue::Json(Value::Number(num)))
            .unwrap_or(JsValue::NonFinite(n))
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for JsValue {
                fn from(n: $t) -> Self {
                    JsValue::Json(Value::Number(Number::from(n)))
                }
            }
        )*
    };
}

from_integer!(i32, i64, u32, u64);

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::Json(Value::String(s))
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::Json(Value::String(s.to_string()))
    }
}

impl<T: Into<JsValue>> From<Option<T>> for JsValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(JsValue::Undefined)
    }
}

/// Category reported by [`get_type`](crate::predicates::get_type).
///
/// Mirrors the host's `typeof` names, with arrays split out of `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsType {
    Array,
    Object,
    String,
    Number,
    Boolean,
    Undefined,
    BigInt,
    Symbol,
}

impl JsType {
    pub fn as_str(self) -> &'static str {
        match self {
            JsType::Array => "array",
            JsType::Object => "object",
            JsType::String => "string",
            JsType::Number => "number",
            JsType::Boolean => "boolean",
            JsType::Undefined => "undefined",
            JsType::BigInt => "bigint",
            JsType::Symbol => "symbol",
        }
    }
}

impl fmt::Display for JsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
