use crate::coerce::{value_to_number, value_to_string};
use serde_json::Value;
use std::borrow::Cow;

/// Arrays and objects become their string form; primitives are unchanged.
fn to_primitive(v: &Value) -> Cow<'_, Value> {
    match v {
        Value::Array(_) | Value::Object(_) => Cow::Owned(Value::String(value_to_string(v))),
        _ => Cow::Borrowed(v),
    }
}

/// The host's `a > b`.
///
/// Two strings compare by UTF-16 code units. Any other pair compares as
/// numbers, and a `NaN` on either side makes the result `false`.
pub fn greater_than(a: &Value, b: &Value) -> bool {
    let (pa, pb) = (to_primitive(a), to_primitive(b));
    if let (Value::String(x), Value::String(y)) = (&*pa, &*pb) {
        return x.encode_utf16().gt(y.encode_utf16());
    }
    value_to_number(&pa) > value_to_number(&pb)
}

/// `(a, b) => a > b` as a sort comparator: the boolean coerced to `1` or `0`.
pub fn gt_comparator(a: &Value, b: &Value) -> i32 {
    greater_than(a, b) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers() {
        assert!(greater_than(&json!(2), &json!(1)));
        assert!(!greater_than(&json!(1), &json!(1)));
        assert!(!greater_than(&json!(1), &json!(2)));
        assert!(greater_than(&json!(2.5), &json!(2)));
    }

    #[test]
    fn test_strings() {
        assert!(greater_than(&json!("b"), &json!("a")));
        assert!(greater_than(&json!("a"), &json!("B")));
        assert!(greater_than(&json!("10"), &json!("1")));
        assert!(!greater_than(&json!("10"), &json!("9")));
    }

    #[test]
    fn test_mixed_operands() {
        assert!(greater_than(&json!("10"), &json!(9)));
        assert!(greater_than(&json!(true), &json!(0)));
        assert!(greater_than(&json!(1), &json!(null)));
        assert!(!greater_than(&json!("abc"), &json!(1)));
        assert!(!greater_than(&json!(1), &json!("abc")));
        assert!(greater_than(&json!([5]), &json!(4)));
        assert!(greater_than(&json!([2]), &json!([10])));
        assert!(greater_than(&json!({}), &json!("[a")));
    }

    #[test]
    fn test_comparator_never_negative() {
        assert_eq!(gt_comparator(&json!(3), &json!(1)), 1);
        assert_eq!(gt_comparator(&json!(1), &json!(3)), 0);
        assert_eq!(gt_comparator(&json!(1), &json!(1)), 0);
    }
}
