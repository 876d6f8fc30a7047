//! Array sorting with the host's `(a, b) => a > b` comparator.

mod compare;
mod insertion;

pub use compare::{greater_than, gt_comparator};
pub use insertion::insertion_sort_by;

use crate::sink::{Sink, TracingSink};
use crate::types::JsValue;
use serde_json::Value;

pub const SORT_NOT_ARRAY: &str = "Error: sortArray, given parameter is not array";

/// Sorts an array value with the comparator `(a, b) => a > b`.
///
/// The comparator answers `1` or `0` and never `-1`, so it only orders
/// values that are totally ordered by `>`. Mixed strings and numbers compare
/// the way the host relational operator does.
///
/// # Examples
///
/// ```
/// use jsz_utils::{sort_array, JsValue};
/// use serde_json::json;
///
/// let sorted = sort_array(JsValue::from(json!([3, 1, 2])));
/// assert_eq!(sorted, JsValue::from(json!([1, 2, 3])));
///
/// // Anything else is reported to the sink.
/// assert_eq!(sort_array(JsValue::from("not an array")), JsValue::Undefined);
/// ```
pub fn sort_array(array: JsValue) -> JsValue {
    sort_array_with(array, &TracingSink)
}

pub fn sort_array_with(array: JsValue, sink: &dyn Sink) -> JsValue {
    match array {
        JsValue::Json(Value::Array(mut items)) => {
            insertion_sort_by(&mut items, gt_comparator);
            JsValue::Json(Value::Array(items))
        }
        _ => sink.error(SORT_NOT_ARRAY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    fn sorted(v: Value) -> Value {
        sort_array(JsValue::from(v)).into_json()
    }

    #[test]
    fn test_sort_numbers_ascending() {
        assert_eq!(sorted(json!([3, 1, 2])), json!([1, 2, 3]));
        assert_eq!(sorted(json!([10, 9, 1, 100])), json!([1, 9, 10, 100]));
        assert_eq!(sorted(json!([-1.5, 2, -3])), json!([-3, -1.5, 2]));
    }

    #[test]
    fn test_sort_strings_by_code_units() {
        assert_eq!(sorted(json!(["b", "a", "B", "aa"])), json!(["B", "a", "aa", "b"]));
    }

    #[test]
    fn test_sort_mixed_numeric_strings_compare_numerically() {
        assert_eq!(sorted(json!(["10", 9, 1])), json!([1, 9, "10"]));
    }

    #[test]
    fn test_sort_keeps_ties_in_order() {
        assert_eq!(
            sorted(json!([{"id": 2}, {"id": 1}])),
            json!([{"id": 2}, {"id": 1}])
        );
    }

    #[test]
    fn test_sort_empty_and_single() {
        assert_eq!(sorted(json!([])), json!([]));
        assert_eq!(sorted(json!([1])), json!([1]));
    }

    #[test]
    fn test_sort_non_array_reports() {
        let seen = RefCell::new(Vec::new());
        let sink = |msg: &str| {
            seen.borrow_mut().push(msg.to_string());
            JsValue::NULL
        };
        assert_eq!(sort_array_with(JsValue::from("not an array"), &sink), JsValue::NULL);
        assert_eq!(sort_array_with(JsValue::from(json!({"0": 1})), &sink), JsValue::NULL);
        assert_eq!(sort_array_with(JsValue::Undefined, &sink), JsValue::NULL);
        assert_eq!(seen.into_inner(), vec![SORT_NOT_ARRAY.to_string(); 3]);
    }
}
