//! Grouping helpers: package positional arguments into an index-keyed object.

use crate::predicates::{is_array, is_object, is_undefined};
use crate::sink::{Sink, TracingSink};
use crate::types::JsValue;
use serde_json::{Map, Value};

pub const GROUP_ARRAYS_NOT_ARRAY: &str = "Error: groupArrays, one or more of given arguments are not array";
pub const GROUP_OBJECTS_NOT_OBJECT: &str = "Error: groupObjects, one or more of given arguments are not object";

static UNDEFINED: JsValue = JsValue::Undefined;

fn group(args: &[JsValue], accept: fn(&JsValue) -> bool, message: &str, sink: &dyn Sink) -> JsValue {
    let mut grouped = Map::new();
    // The bound is inclusive; the index past the end reads as undefined and is skipped.
    for i in 0..=args.len() {
        let arg = args.get(i).unwrap_or(&UNDEFINED);
        if is_undefined(arg) {
            continue;
        }
        if !accept(arg) {
            return sink.error(message);
        }
        grouped.insert(i.to_string(), arg.clone().into_json());
    }
    JsValue::Json(Value::Object(grouped))
}

/// Collects array arguments into an object keyed by argument position.
///
/// Undefined arguments are skipped but keep their position, so keys can have
/// gaps. Any other non-array argument is reported and nothing is returned
/// but the sink's value.
///
/// # Examples
///
/// ```
/// use jsz_utils::{group_arrays, JsValue};
/// use serde_json::json;
///
/// let grouped = group_arrays(&[JsValue::from(json!([1])), JsValue::Undefined, JsValue::from(json!([2]))]);
/// assert_eq!(grouped, JsValue::from(json!({"0": [1], "2": [2]})));
/// ```
pub fn group_arrays(args: &[JsValue]) -> JsValue {
    group_arrays_with(args, &TracingSink)
}

pub fn group_arrays_with(args: &[JsValue], sink: &dyn Sink) -> JsValue {
    group(args, is_array, GROUP_ARRAYS_NOT_ARRAY, sink)
}

/// Collects object arguments into an object keyed by argument position.
///
/// Accepts whatever [`is_object`] accepts, which includes `null`.
pub fn group_objects(args: &[JsValue]) -> JsValue {
    group_objects_with(args, &TracingSink)
}

pub fn group_objects_with(args: &[JsValue], sink: &dyn Sink) -> JsValue {
    group(args, is_object, GROUP_OBJECTS_NOT_OBJECT, sink)
}
