//! `JsonEncoder` writes JSON text with the host's `JSON.stringify` number
//! formatting (`1.0` is written as `1`, `1e21` as `1e+21`).

use crate::coerce::{json_number_to_string, number_to_string};
use serde_json::{Map, Number, Value};

#[derive(Debug, Default)]
pub struct JsonEncoder {
    out: String,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `value`, returning the text and leaving the encoder empty.
    pub fn encode(&mut self, value: &Value) -> String {
        self.out.clear();
        self.write_json(value);
        std::mem::take(&mut self.out)
    }

    /// Encodes a double on its own, `null` when it is not finite.
    pub fn encode_float(&mut self, f: f64) -> String {
        self.out.clear();
        self.write_float(f);
        std::mem::take(&mut self.out)
    }

    pub fn write_json(&mut self, value: &Value) {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Number(n) => self.write_number(n),
            Value::String(s) => self.write_str(s),
            Value::Array(arr) => self.write_arr(arr),
            Value::Object(obj) => self.write_obj(obj),
        }
    }

    pub fn write_null(&mut self) {
        self.out.push_str("null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    pub fn write_number(&mut self, n: &Number) {
        self.out.push_str(&json_number_to_string(n));
    }

    /// Non-finite numbers have no JSON form and are written as `null`.
    pub fn write_float(&mut self, f: f64) {
        if f.is_finite() {
            self.out.push_str(&number_to_string(f));
        } else {
            self.write_null();
        }
    }

    pub fn write_str(&mut self, s: &str) {
        // Serializing a str cannot fail.
        match serde_json::to_string(s) {
            Ok(quoted) => self.out.push_str(&quoted),
            Err(_) => self.write_null(),
        }
    }

    pub fn write_arr(&mut self, arr: &[Value]) {
        self.out.push('[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_json(item);
        }
        self.out.push(']');
    }

    pub fn write_obj(&mut self, obj: &Map<String, Value>) {
        self.out.push('{');
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_str(key);
            self.out.push(':');
            self.write_json(value);
        }
        self.out.push('}');
    }
}
